//! Transactional demo seed
//!
//! Upserts three ordered batches (sources, then coachees, then sessions)
//! inside one transaction. Each insert skips silently when the id already
//! exists, so re-running the same payload is a no-op for existing rows.
//! Any other failure rolls the whole batch back.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::coachee::NewCoachee;
use crate::models::session::NewSession;
use crate::models::source::NewSource;

/// Run the three seed phases in order on one dedicated connection.
/// The transaction commits on success and rolls back on drop otherwise.
pub async fn apply(
    pool: &PgPool,
    sources: &[NewSource],
    coachees: &[NewCoachee],
    sessions: &[NewSession],
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    // Entries run sequentially in payload order so coachees can reference
    // sources from the same payload, and sessions can reference coachees.
    for source in sources {
        sqlx::query(
            r#"
            INSERT INTO sources (id, name, country, website, created_on, last_updated)
            VALUES ($1, $2, $3, $4, COALESCE($5, NOW()), COALESCE($6, NOW()))
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&source.id)
        .bind(&source.name)
        .bind(source.country.clone().unwrap_or_default())
        .bind(source.website.clone().unwrap_or_default())
        .bind(source.created_on)
        .bind(source.last_updated)
        .execute(&mut *tx)
        .await?;
    }

    for coachee in coachees {
        let f = &coachee.fields;
        sqlx::query(
            r#"
            INSERT INTO coachees (
                id, type, first_name, second_name, age_group, sex, email, phone,
                linkedin, occupation, group_team_name, num_participants, members,
                organisation, city, country, source_id, created_on, last_updated
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8,
                $9, $10, $11, $12, $13,
                $14, $15, $16, $17, COALESCE($18, NOW()), COALESCE($19, NOW())
            )
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&coachee.id)
        .bind(&coachee.kind)
        .bind(&f.first_name)
        .bind(&f.second_name)
        .bind(&f.age_group)
        .bind(&f.sex)
        .bind(&f.email)
        .bind(&f.phone)
        .bind(&f.linkedin)
        .bind(&f.occupation)
        .bind(&f.group_team_name)
        .bind(f.num_participants)
        .bind(&f.members)
        .bind(&f.organisation)
        .bind(&f.city)
        .bind(&f.country)
        .bind(&f.source_id)
        .bind(coachee.created_on)
        .bind(coachee.last_updated)
        .execute(&mut *tx)
        .await?;
    }

    for session in sessions {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                id, coachee_id, coachee_type, session_date, duration, theme,
                payment_type, notes, created_on, last_updated
            ) VALUES (
                $1, $2, $3, $4, $5, $6,
                $7, $8, COALESCE($9, NOW()), COALESCE($10, NOW())
            )
            ON CONFLICT (id) DO NOTHING
            "#,
        )
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
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(())
}
