use crate::models;
use serde_derive::{Deserialize, Serialize};

/// Body returned by the auth service for a valid token.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub user: User,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub email_confirmed: bool,
}

fn default_role() -> String {
    "group_user".to_string()
}

impl TryFrom<UserForm> for models::User {
    type Error = String;

    fn try_from(form: UserForm) -> Result<Self, Self::Error> {
        if form.user.id.trim().is_empty() {
            return Err("user id is missing".to_string());
        }

        Ok(models::User {
            id: form.user.id,
            first_name: form.user.first_name,
            last_name: form.user.last_name,
            email: form.user.email,
            role: form.user.role,
            email_confirmed: form.user.email_confirmed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_auth_service_payload() {
        let form: UserForm = serde_json::from_str(
            r#"{"user": {"_id": "42", "first_name": "Ann", "email": "ann@example.com"}}"#,
        )
        .unwrap();
        let user: models::User = form.try_into().unwrap();

        assert_eq!(user.id, "42");
        assert_eq!(user.first_name, "Ann");
        assert_eq!(user.role, "group_user");
        assert!(!user.email_confirmed);
    }

    #[test]
    fn empty_id_is_rejected() {
        let form = UserForm::default();
        assert!(models::User::try_from(form).is_err());
    }
}
