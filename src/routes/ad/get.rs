use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, serde::Deserialize)]
pub struct AdListQuery {
    pub search: Option<String>,
}

/// All ads, or at most ten matching `search`. `meta.favorites` holds the ids
/// the caller has favorited.
#[tracing::instrument(name = "Get ads.")]
#[get("")]
pub async fn list(
    query: web::Query<AdListQuery>,
    user: Option<web::ReqData<Arc<models::User>>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let ads = match query.search.as_deref().filter(|search| !search.is_empty()) {
        Some(search) => db::ad::search(pg_pool.get_ref(), search).await,
        None => db::ad::fetch_all(pg_pool.get_ref()).await,
    }
    .map_err(|err| JsonResponse::<views::ad::Listing>::build().internal_server_error(err))?;

    let favorites: Vec<i32> = match user {
        Some(user) => db::fav::fetch_by_user(pg_pool.get_ref(), &user.id)
            .await
            .map_err(|err| JsonResponse::<views::ad::Listing>::build().internal_server_error(err))?
            .into_iter()
            .map(|fav| fav.ad_id)
            .collect(),
        None => vec![],
    };

    let ads = ads
        .into_iter()
        .map(Into::into)
        .collect::<Vec<views::ad::Listing>>();

    Ok(JsonResponse::build()
        .set_list(ads)
        .set_meta(serde_json::json!({ "favorites": favorites }))
        .ok("OK"))
}

#[tracing::instrument(name = "Get ad.")]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let ad = db::ad::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<views::ad::Detail>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<views::ad::Detail>::build().not_found("not found"))?;

    let comments = db::comment::fetch_by_ad(pg_pool.get_ref(), ad.id)
        .await
        .map_err(|err| JsonResponse::<views::ad::Detail>::build().internal_server_error(err))?;

    Ok(JsonResponse::build()
        .set_item(views::ad::Detail::from((ad, comments)))
        .ok("OK"))
}
