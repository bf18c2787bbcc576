use serde::{Deserialize, Serialize};

/// Identity resolved by the external auth service. Not stored locally.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub email_confirmed: bool,
}
