use crate::helpers::natural_time;
use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Serialize, Default)]
pub struct Listing {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub price: Option<f64>,
    pub has_picture: bool,
    pub content_type: Option<String>,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub natural_updated: String,
}

impl From<models::Ad> for Listing {
    fn from(ad: models::Ad) -> Self {
        Self {
            natural_updated: natural_time(ad.updated_at, Utc::now()),
            id: ad.id,
            title: ad.title,
            text: ad.text,
            price: ad.price,
            has_picture: ad.has_picture,
            content_type: ad.content_type,
            owner_id: ad.owner_id,
            created_at: ad.created_at,
            updated_at: ad.updated_at,
        }
    }
}
