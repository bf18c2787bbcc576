use actix_casbin_auth::CasbinVals;
use actix_web::dev::ServiceRequest;
use actix_web::HttpMessage;

/// Casbin subject for callers without a token, mapped to `group_anonymous` in `casbin_rule`.
pub const ANONYMOUS_SUBJECT: &str = "anonym";

/// Fallback when neither a bearer token nor an `access_token` cookie is present.
/// Anonymous visitors may browse ads and pictures but nothing else.
#[tracing::instrument(name = "Browse anonymously")]
pub fn anonym(req: &mut ServiceRequest) -> Result<bool, String> {
    let acl_vals = CasbinVals {
        subject: ANONYMOUS_SUBJECT.to_string(),
        domain: None,
    };
    if req.extensions_mut().insert(acl_vals).is_some() {
        return Err("access control values are already set".to_string());
    }

    Ok(true)
}
