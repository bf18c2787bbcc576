use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Delete ad.")]
#[delete("/{id}")]
pub async fn item(
    user: web::ReqData<Arc<models::User>>,
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    let ad = db::ad::fetch_owned(pg_pool.get_ref(), id, &user.id)
        .await
        .map_err(|err| JsonResponse::<models::Ad>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Ad>::build().not_found("not found"))?;

    db::ad::delete(pg_pool.get_ref(), ad.id)
        .await
        .map_err(|err| JsonResponse::<models::Ad>::build().internal_server_error(err))
        .and_then(|deleted| match deleted {
            true => Ok(JsonResponse::<models::Ad>::build().set_id(ad.id).ok("Deleted")),
            false => Err(JsonResponse::<models::Ad>::build().not_found("not found")),
        })
}
