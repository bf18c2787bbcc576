use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, web, HttpResponse, Result};
use sqlx::PgPool;
use std::sync::Arc;

/// Removes the caller's own comment and sends them back to its ad.
#[tracing::instrument(name = "Delete comment.")]
#[delete("/{id}")]
pub async fn delete_handler(
    user: web::ReqData<Arc<models::User>>,
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (id,) = path.into_inner();

    let comment = db::comment::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Comment>::build().internal_server_error(err))
        .and_then(|comment| match comment {
            Some(comment) if comment.owner_id == user.id => Ok(comment),
            _ => Err(JsonResponse::<models::Comment>::build().not_found("not found")),
        })?;

    db::comment::delete(pg_pool.get_ref(), comment.id)
        .await
        .map_err(|err| JsonResponse::<models::Comment>::build().internal_server_error(err))?;

    Ok(super::redirect_to_ad(comment.ad_id))
}
