use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, HttpResponse, Result};
use sqlx::PgPool;
use std::sync::Arc;

/// Removing a favorite that does not exist is a no-op.
#[tracing::instrument(name = "Delete favorite.")]
#[post("/{id}/unfavorite")]
pub async fn delete_handler(
    path: web::Path<(i32,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (ad_id,) = path.into_inner();
    let ad = db::ad::fetch(pg_pool.get_ref(), ad_id)
        .await
        .map_err(|err| JsonResponse::<models::Fav>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Fav>::build().not_found("Ad not found"))?;

    db::fav::delete(pg_pool.get_ref(), ad.id, &user.id)
        .await
        .map_err(|err| JsonResponse::<models::Fav>::build().internal_server_error(err))?;

    Ok(HttpResponse::Ok().finish())
}
