//! Session repository for database operations

use sqlx::types::Json;
use sqlx::PgPool;

use crate::db::models::SessionRow;
use crate::models::session::{NewSession, UpdateSession};

const SESSION_COLUMNS: &str = r#"
    id, coachee_id, coachee_type, session_date, duration, theme,
    payment_type, notes, created_on, last_updated
"#;

/// List all sessions, most recent event first, ties broken by creation time
pub async fn list_all(pool: &PgPool) -> Result<Vec<SessionRow>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM sessions ORDER BY session_date DESC, created_on DESC",
        SESSION_COLUMNS
    );

    sqlx::query_as::<_, SessionRow>(&sql).fetch_all(pool).await
}

/// Insert a new session with a caller-assigned id
pub async fn insert(pool: &PgPool, session: &NewSession) -> Result<SessionRow, sqlx::Error> {
    let sql = format!(
        r#"
        INSERT INTO sessions (
            id, coachee_id, coachee_type, session_date, duration, theme,
            payment_type, notes, created_on, last_updated
        ) VALUES (
            $1, $2, $3, $4, $5, $6,
            $7, $8, COALESCE($9, NOW()), COALESCE($10, NOW())
        )
        RETURNING {}
        "#,
        SESSION_COLUMNS
    );

    sqlx::query_as::<_, SessionRow>(&sql)
        .bind(&session.id)
        .bind(&session.coachee_id)
        .bind(&session.coachee_type)
        .bind(session.session_date)
        .bind(session.duration)
        .bind(Json(session.theme.clone().unwrap_or_default()))
        .bind(&session.payment_type)
        .bind(session.notes.clone().unwrap_or_default())
        .bind(session.created_on)
        .bind(session.last_updated)
        .fetch_one(pool)
        .await
}

/// Full replace of a session's mutable fields; bumps last_updated.
/// Returns None when no row matched the id.
pub async fn update(
    pool: &PgPool,
    id: &str,
    changes: &UpdateSession,
) -> Result<Option<SessionRow>, sqlx::Error> {
    let sql = format!(
        r#"
        UPDATE sessions
        SET coachee_id = $2,
            coachee_type = $3,
            session_date = $4,
            duration = $5,
            theme = $6,
            payment_type = $7,
            notes = $8,
            last_updated = NOW()
        WHERE id = $1
        RETURNING {}
        "#,
        SESSION_COLUMNS
    );

    sqlx::query_as::<_, SessionRow>(&sql)
        .bind(id)
        .bind(&changes.coachee_id)
        .bind(&changes.coachee_type)
        .bind(changes.session_date)
        .bind(changes.duration)
        .bind(Json(changes.theme.clone().unwrap_or_default()))
        .bind(&changes.payment_type)
        .bind(changes.notes.clone().unwrap_or_default())
        .fetch_optional(pool)
        .await
}

/// Delete a session by id, returning the number of rows removed
pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
