mod f_anonym;
mod f_cookie;
mod f_oauth;

pub use f_anonym::anonym;
pub use f_cookie::try_cookie;
pub use f_oauth::{try_oauth, UserCache};

use crate::models;
use actix_web::{dev::ServiceRequest, HttpMessage};
use std::sync::Arc;

/// Attaches the resolved user to the request and hands its role to casbin.
fn login(req: &mut ServiceRequest, user: models::User) -> Result<(), String> {
    tracing::debug!("ACL check for role: {}", user.role);
    let acl_vals = actix_casbin_auth::CasbinVals {
        subject: user.role.clone(),
        domain: None,
    };

    if req.extensions_mut().insert(Arc::new(user)).is_some() {
        return Err("user already logged".to_string());
    }

    if req.extensions_mut().insert(acl_vals).is_some() {
        return Err("Something wrong with access control".to_string());
    }

    Ok(())
}
