use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

/// Upper bound on the number of ads returned by a search.
pub const SEARCH_LIMIT: i64 = 10;

const AD_COLUMNS: &str = r#"
    id,
    title,
    text,
    price::float8 AS price,
    content_type,
    picture IS NOT NULL AS has_picture,
    owner_id,
    created_at,
    updated_at
"#;

/// Turns user input into an ILIKE pattern matching it as a literal substring.
pub fn search_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Ad>, String> {
    tracing::info!("Fetch ad {}", id);
    let query = format!("SELECT {} FROM ad WHERE id=$1 LIMIT 1", AD_COLUMNS);
    sqlx::query_as::<_, models::Ad>(&query)
        .bind(id)
        .fetch_one(pool)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch ad, error: {:?}", e);
                Err("Could not fetch data".to_string())
            }
        })
}

/// Same as [`fetch`] but only returns the ad when `owner_id` owns it.
pub async fn fetch_owned(
    pool: &PgPool,
    id: i32,
    owner_id: &str,
) -> Result<Option<models::Ad>, String> {
    fetch(pool, id)
        .await
        .map(|ad| ad.filter(|ad| ad.owner_id == owner_id))
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Ad>, String> {
    let query_span = tracing::info_span!("Fetch all ads.");
    let query = format!(
        "SELECT {} FROM ad ORDER BY updated_at DESC, id DESC",
        AD_COLUMNS
    );
    sqlx::query_as::<_, models::Ad>(&query)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch ads, error: {:?}", err);
            "".to_string()
        })
}

/// Ads whose title or text contains `query`, most recently updated first.
pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<models::Ad>, String> {
    let query_span = tracing::info_span!("Search ads.", query = %query);
    let sql = format!(
        r#"SELECT {} FROM ad
        WHERE title ILIKE $1 ESCAPE '\' OR text ILIKE $1 ESCAPE '\'
        ORDER BY updated_at DESC, id DESC
        LIMIT $2"#,
        AD_COLUMNS
    );
    sqlx::query_as::<_, models::Ad>(&sql)
        .bind(search_pattern(query))
        .bind(SEARCH_LIMIT)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to search ads, error: {:?}", err);
            "".to_string()
        })
}

pub async fn fetch_picture(pool: &PgPool, id: i32) -> Result<Option<models::Picture>, String> {
    let query_span = tracing::info_span!("Fetch ad picture.");
    sqlx::query_as::<_, models::Picture>(
        r#"
        SELECT
            COALESCE(content_type, 'application/octet-stream') AS content_type,
            picture AS data
        FROM ad
        WHERE id=$1 AND picture IS NOT NULL
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch picture, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    mut ad: models::Ad,
    picture: Option<models::Picture>,
) -> Result<models::Ad, String> {
    let query_span = tracing::info_span!("Saving new ad into the database");
    let (content_type, data) = match picture {
        Some(picture) => (Some(picture.content_type), Some(picture.data)),
        None => (None, None),
    };

    let (id, created_at) = sqlx::query_as::<_, (i32, chrono::DateTime<chrono::Utc>)>(
        r#"
        INSERT INTO ad (title, text, price, picture, content_type, owner_id, created_at, updated_at)
        VALUES ($1, $2, $3::numeric(7, 2), $4, $5, $6, NOW(), NOW())
        RETURNING id, created_at
        "#,
    )
    .bind(&ad.title)
    .bind(&ad.text)
    .bind(ad.price)
    .bind(data.as_deref())
    .bind(content_type.as_deref())
    .bind(&ad.owner_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to insert".to_string()
    })?;

    ad.id = id;
    ad.created_at = created_at;
    ad.updated_at = created_at;
    ad.has_picture = data.is_some();
    ad.content_type = content_type;

    Ok(ad)
}

/// Updates the ad in place. Without a new picture the stored one is kept.
pub async fn update(
    pool: &PgPool,
    ad: models::Ad,
    picture: Option<models::Picture>,
) -> Result<models::Ad, String> {
    let query_span = tracing::info_span!("Updating ad");
    let (content_type, data) = match picture {
        Some(picture) => (Some(picture.content_type), Some(picture.data)),
        None => (None, None),
    };

    let query = format!(
        r#"
        UPDATE ad
        SET
            title=$2,
            text=$3,
            price=$4::numeric(7, 2),
            picture=COALESCE($5, picture),
            content_type=CASE WHEN $5 IS NULL THEN content_type ELSE $6 END,
            updated_at=NOW()
        WHERE id = $1
        RETURNING {}
        "#,
        AD_COLUMNS
    );
    sqlx::query_as::<_, models::Ad>(&query)
        .bind(ad.id)
        .bind(&ad.title)
        .bind(&ad.text)
        .bind(ad.price)
        .bind(data.as_deref())
        .bind(content_type.as_deref())
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map(|ad| {
            tracing::info!("Ad {} has been saved", ad.id);
            ad
        })
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            "".to_string()
        })
}

#[tracing::instrument(name = "Delete ad.")]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    tracing::info!("Delete ad {}", id);
    sqlx::query::<sqlx::Postgres>("DELETE FROM ad WHERE id = $1;")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete ad: {:?}", err);
            "Failed to delete ad".to_string()
        })
}
