use crate::configuration::Settings;
use crate::forms;
use crate::middleware::authentication::get_header;
use crate::models;
use actix_web::{dev::ServiceRequest, web};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Users resolved by the auth service, keyed by token.
pub struct UserCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CachedUser>>,
}

struct CachedUser {
    user: models::User,
    expires_at: Instant,
}

impl UserCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, token: &str) -> Option<models::User> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            match entries.get(token) {
                Some(entry) if entry.expires_at > now => return Some(entry.user.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // expired, drop it unless someone refreshed it meanwhile
        let mut entries = self.entries.write().await;
        match entries.get(token) {
            Some(entry) if entry.expires_at > now => Some(entry.user.clone()),
            _ => {
                entries.remove(token);
                None
            }
        }
    }

    /// Stores `user` for `token`. Expired entries of other tokens are swept
    /// here, so one-off tokens do not pile up.
    pub async fn insert(&self, token: String, user: models::User) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            token,
            CachedUser {
                user,
                expires_at: now + self.ttl,
            },
        );
    }
}

fn try_extract_token(authentication: String) -> Result<String, String> {
    let mut authentication_parts = authentication.splitn(2, ' ');
    match authentication_parts.next() {
        Some("Bearer") => {}
        _ => return Err("Bearer missing scheme".to_string()),
    }

    match authentication_parts.next().map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => {
            tracing::error!("Bearer token is missing");
            Err("Authentication required".to_string())
        }
    }
}

#[tracing::instrument(name = "Authenticate with bearer token")]
pub async fn try_oauth(req: &mut ServiceRequest) -> Result<bool, String> {
    let authentication = match get_header::<String>(req, "authorization")? {
        Some(authentication) => authentication,
        None => return Ok(false),
    };

    let token = try_extract_token(authentication)?;
    let user = resolve_user(req, token).await?;
    super::login(req, user)?;

    Ok(true)
}

/// Looks the token up in the cache, asking the auth service on a miss.
pub(super) async fn resolve_user(
    req: &ServiceRequest,
    token: String,
) -> Result<models::User, String> {
    let settings = req
        .app_data::<web::Data<Settings>>()
        .ok_or("settings are not configured")?;
    let http_client = req
        .app_data::<web::Data<reqwest::Client>>()
        .ok_or("http client is not configured")?;
    let cache = req
        .app_data::<web::Data<UserCache>>()
        .ok_or("user cache is not configured")?;

    if let Some(user) = cache.get(&token).await {
        return Ok(user);
    }

    let user = fetch_user(http_client.get_ref(), settings.auth_url.as_str(), &token).await?;
    cache.insert(token, user.clone()).await;

    Ok(user)
}

async fn fetch_user(
    client: &reqwest::Client,
    auth_url: &str,
    token: &str,
) -> Result<models::User, String> {
    let resp = client
        .get(auth_url)
        .bearer_auth(token)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|err| {
            tracing::error!(target: "auth", error = %err, "OAuth request failed");
            "No response from OAuth server".to_string()
        })?;

    if !resp.status().is_success() {
        return Err("401 Unauthorized".to_string());
    }

    resp.json::<forms::UserForm>()
        .await
        .map_err(|_err| "can't parse the response body".to_string())?
        .try_into()
}
