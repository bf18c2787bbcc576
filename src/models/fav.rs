use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

/// User-to-ad favorite; `(ad_id, user_id)` is unique.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Fav {
    pub id: i32,
    pub ad_id: i32,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}
