use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

/// A listing. The picture bytes are loaded separately, see [`Picture`].
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ad {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub price: Option<f64>,
    pub content_type: Option<String>,
    pub has_picture: bool,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Picture {
    pub content_type: String,
    pub data: Vec<u8>,
}
