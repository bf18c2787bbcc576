use crate::middleware::authentication::get_header;
use actix_web::dev::ServiceRequest;

fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|cookie| {
        let (key, value) = cookie.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}

#[tracing::instrument(name = "Authenticate with cookie")]
pub async fn try_cookie(req: &mut ServiceRequest) -> Result<bool, String> {
    let cookies = match get_header::<String>(req, "cookie")? {
        Some(cookies) => cookies,
        None => return Ok(false),
    };

    let token = match find_cookie(&cookies, "access_token") {
        Some(token) => token,
        None => return Ok(false),
    };

    tracing::debug!("Found access_token in cookies");

    // same validation as a bearer token
    let user = super::f_oauth::resolve_user(req, token).await?;
    super::login(req, user)?;

    Ok(true)
}
