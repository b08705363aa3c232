//! Source repository for database operations

use sqlx::PgPool;

use crate::db::models::SourceRow;
use crate::models::source::{NewSource, UpdateSource};

/// List all sources, oldest first
pub async fn list_all(pool: &PgPool) -> Result<Vec<SourceRow>, sqlx::Error> {
    sqlx::query_as::<_, SourceRow>(
        r#"
        SELECT id, name, country, website, created_on, last_updated
        FROM sources
        ORDER BY created_on ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Insert a new source with a caller-assigned id.
/// A duplicate id surfaces as a unique-violation database error.
pub async fn insert(pool: &PgPool, source: &NewSource) -> Result<SourceRow, sqlx::Error> {
    sqlx::query_as::<_, SourceRow>(
        r#"
        INSERT INTO sources (id, name, country, website, created_on, last_updated)
        VALUES ($1, $2, $3, $4, COALESCE($5, NOW()), COALESCE($6, NOW()))
        RETURNING id, name, country, website, created_on, last_updated
        "#,
    )
    .bind(&source.id)
    .bind(&source.name)
    .bind(source.country.clone().unwrap_or_default())
    .bind(source.website.clone().unwrap_or_default())
    .bind(source.created_on)
    .bind(source.last_updated)
    .fetch_one(pool)
    .await
}

/// Full replace of a source's mutable fields; bumps last_updated.
/// Returns None when no row matched the id.
pub async fn update(
    pool: &PgPool,
    id: &str,
    changes: &UpdateSource,
) -> Result<Option<SourceRow>, sqlx::Error> {
    sqlx::query_as::<_, SourceRow>(
        r#"
        UPDATE sources
        SET name = $2, country = $3, website = $4, last_updated = NOW()
        WHERE id = $1
        RETURNING id, name, country, website, created_on, last_updated
        "#,
    )
    .bind(id)
    .bind(&changes.name)
    .bind(changes.country.clone().unwrap_or_default())
    .bind(changes.website.clone().unwrap_or_default())
    .fetch_optional(pool)
    .await
}

/// Delete a source by id, returning the number of rows removed
pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sources WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
