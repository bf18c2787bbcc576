use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::http::header::{ContentEncoding, ContentType};
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

/// Raw picture bytes. Content-Length comes from the sized body, so the
/// response is kept out of `Compress` by an identity encoding.
#[tracing::instrument(name = "Stream ad picture.")]
#[get("/{id}/picture")]
pub async fn stream(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (id,) = path.into_inner();
    let picture = db::ad::fetch_picture(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Ad>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Ad>::build().not_found("not found"))?;

    let content_type = picture
        .content_type
        .parse()
        .map(ContentType)
        .unwrap_or_else(|_| ContentType::octet_stream());

    Ok(HttpResponse::Ok()
        .insert_header(content_type)
        .insert_header(ContentEncoding::Identity)
        .body(picture.data))
}
