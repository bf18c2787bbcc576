use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, HttpResponse, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Add comment.")]
#[post("/{id}/comments")]
pub async fn add_handler(
    path: web::Path<(i32,)>,
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::Comment>,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Comment>::build().form_error(errors.to_string()));
    }

    let (ad_id,) = path.into_inner();
    let ad = db::ad::fetch(pg_pool.get_ref(), ad_id)
        .await
        .map_err(|err| JsonResponse::<models::Comment>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Comment>::build().not_found("Ad not found"))?;

    let comment = models::Comment {
        text: form.into_inner().comment,
        owner_id: user.id.clone(),
        ad_id: ad.id,
        ..Default::default()
    };

    let comment = db::comment::insert(pg_pool.get_ref(), comment)
        .await
        .map_err(|err| JsonResponse::<models::Comment>::build().internal_server_error(err))?;

    tracing::info!("Comment {} added to ad {}", comment.id, comment.ad_id);

    Ok(super::redirect_to_ad(comment.ad_id))
}
