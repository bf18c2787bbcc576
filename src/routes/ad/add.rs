use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{post, web, HttpResponse, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::ops::Deref;
use std::sync::Arc;

#[tracing::instrument(name = "Add ad.", skip(form, settings))]
#[post("")]
pub async fn add(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::Ad>,
    settings: web::Data<Settings>,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(errors) = form.validate() {
        tracing::debug!("Invalid ad received {}", errors);
        return Err(JsonResponse::<views::ad::Listing>::build().form_error(errors.to_string()));
    }

    let picture = form
        .decode_picture(settings.max_picture_bytes)
        .map_err(|err| JsonResponse::<views::ad::Listing>::build().bad_request(err))?;

    let mut ad: models::Ad = form.deref().into();
    ad.owner_id = user.id.clone();

    db::ad::insert(pg_pool.get_ref(), ad, picture)
        .await
        .map(|ad| {
            JsonResponse::build()
                .set_id(ad.id)
                .set_item(views::ad::Listing::from(ad))
                .created("success")
        })
        .map_err(|err| JsonResponse::<views::ad::Listing>::build().internal_server_error(err))
}
