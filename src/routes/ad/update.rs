use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::ops::Deref;
use std::sync::Arc;

/// Only the owner may edit; anyone else gets a 404.
#[tracing::instrument(name = "Update ad.", skip(form, settings))]
#[put("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    form: web::Json<forms::Ad>,
    user: web::ReqData<Arc<models::User>>,
    settings: web::Data<Settings>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let ad_row = db::ad::fetch_owned(pg_pool.get_ref(), id, &user.id)
        .await
        .map_err(|err| JsonResponse::<views::ad::Listing>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<views::ad::Listing>::build().not_found("Ad not found"))?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::ad::Listing>::build().form_error(errors.to_string()));
    }

    let picture = form
        .decode_picture(settings.max_picture_bytes)
        .map_err(|err| JsonResponse::<views::ad::Listing>::build().bad_request(err))?;

    let mut ad: models::Ad = form.deref().into();
    ad.id = ad_row.id;
    ad.owner_id = ad_row.owner_id;

    tracing::debug!("Updating ad {}", ad.id);

    db::ad::update(pg_pool.get_ref(), ad, picture)
        .await
        .map(|ad| {
            JsonResponse::build()
                .set_item(views::ad::Listing::from(ad))
                .ok("success")
        })
        .map_err(|_err| {
            JsonResponse::<views::ad::Listing>::build().internal_server_error("Could not update")
        })
}
