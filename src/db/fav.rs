use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

/// Links `user_id` to the ad. Returns `false` when the pair already exists;
/// the unique violation raised for a duplicate is not an error.
pub async fn insert(pool: &PgPool, ad_id: i32, user_id: &str) -> Result<bool, String> {
    let query_span = tracing::info_span!("Saving favorite.", ad_id, user_id);
    let result = sqlx::query::<sqlx::Postgres>(
        "INSERT INTO fav (ad_id, user_id, created_at) VALUES ($1, $2, NOW())",
    )
    .bind(ad_id)
    .bind(user_id)
    .execute(pool)
    .instrument(query_span)
    .await;

    match result {
        Ok(_) => Ok(true),
        Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
            tracing::debug!("Ad {} is already a favorite of {}", ad_id, user_id);
            Ok(false)
        }
        Err(err) => {
            tracing::error!("Failed to save favorite: {:?}", err);
            Err("Failed to insert".to_string())
        }
    }
}

/// Unlinks `user_id` from the ad. Returns `false` when there was nothing to remove.
pub async fn delete(pool: &PgPool, ad_id: i32, user_id: &str) -> Result<bool, String> {
    let query_span = tracing::info_span!("Deleting favorite.", ad_id, user_id);
    sqlx::query::<sqlx::Postgres>("DELETE FROM fav WHERE ad_id = $1 AND user_id = $2")
        .bind(ad_id)
        .bind(user_id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete favorite: {:?}", err);
            "Failed to delete favorite".to_string()
        })
}

pub async fn fetch_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<models::Fav>, String> {
    let query_span = tracing::info_span!("Fetch favorites by user id.");
    sqlx::query_as::<_, models::Fav>(
        "SELECT id, ad_id, user_id, created_at FROM fav WHERE user_id = $1 ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch favorites, error: {:?}", err);
        "".to_string()
    })
}
