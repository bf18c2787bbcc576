use crate::helpers::natural_time;
use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize, Default)]
pub struct Comment {
    pub id: i32,
    pub text: String,
    pub owner_id: String,
    pub ad_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub natural_updated: String,
}

impl From<models::Comment> for Comment {
    fn from(comment: models::Comment) -> Self {
        Self {
            natural_updated: natural_time(comment.updated_at, Utc::now()),
            id: comment.id,
            text: comment.text,
            owner_id: comment.owner_id,
            ad_id: comment.ad_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
