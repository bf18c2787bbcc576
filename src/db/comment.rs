use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Comment>, String> {
    tracing::info!("Fetch comment {}", id);
    sqlx::query_as::<_, models::Comment>(
        r#"SELECT id, text, owner_id, ad_id, created_at, updated_at FROM comment WHERE id=$1 LIMIT 1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch comment, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

/// Comments of an ad, most recently updated first.
pub async fn fetch_by_ad(pool: &PgPool, ad_id: i32) -> Result<Vec<models::Comment>, String> {
    let query_span = tracing::info_span!("Fetch comments by ad id.");
    sqlx::query_as::<_, models::Comment>(
        r#"
        SELECT id, text, owner_id, ad_id, created_at, updated_at
        FROM comment
        WHERE ad_id=$1
        ORDER BY updated_at DESC, id DESC
        "#,
    )
    .bind(ad_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch comments, error: {:?}", err);
        "".to_string()
    })
}

pub async fn insert(pool: &PgPool, mut comment: models::Comment) -> Result<models::Comment, String> {
    let query_span = tracing::info_span!("Saving new comment into the database");
    let (id, created_at) = sqlx::query_as::<_, (i32, chrono::DateTime<chrono::Utc>)>(
        r#"
        INSERT INTO comment (text, owner_id, ad_id, created_at, updated_at)
        VALUES ($1, $2, $3, NOW(), NOW())
        RETURNING id, created_at
        "#,
    )
    .bind(&comment.text)
    .bind(&comment.owner_id)
    .bind(comment.ad_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to insert".to_string()
    })?;

    comment.id = id;
    comment.created_at = created_at;
    comment.updated_at = created_at;

    Ok(comment)
}

#[tracing::instrument(name = "Delete comment.")]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    sqlx::query::<sqlx::Postgres>("DELETE FROM comment WHERE id = $1;")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete comment: {:?}", err);
            "Failed to delete comment".to_string()
        })
}
