//! Coachee repository for database operations

use sqlx::PgPool;

use crate::db::models::CoacheeRow;
use crate::models::coachee::{NewCoachee, UpdateCoachee};

const COACHEE_COLUMNS: &str = r#"
    id, type, first_name, second_name, age_group, sex, email, phone,
    linkedin, occupation, group_team_name, num_participants, members,
    organisation, city, country, source_id, created_on, last_updated
"#;

/// List all coachees, oldest first
pub async fn list_all(pool: &PgPool) -> Result<Vec<CoacheeRow>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM coachees ORDER BY created_on ASC",
        COACHEE_COLUMNS
    );

    sqlx::query_as::<_, CoacheeRow>(&sql).fetch_all(pool).await
}

/// Insert a new coachee with a caller-assigned id
pub async fn insert(pool: &PgPool, coachee: &NewCoachee) -> Result<CoacheeRow, sqlx::Error> {
    let sql = format!(
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
        RETURNING {}
        "#,
        COACHEE_COLUMNS
    );

    let f = &coachee.fields;
    sqlx::query_as::<_, CoacheeRow>(&sql)
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
        .fetch_one(pool)
        .await
}

/// Full replace of a coachee's mutable fields; bumps last_updated.
/// Returns None when no row matched the id.
pub async fn update(
    pool: &PgPool,
    id: &str,
    changes: &UpdateCoachee,
) -> Result<Option<CoacheeRow>, sqlx::Error> {
    let sql = format!(
        r#"
        UPDATE coachees SET
            type = $2,
            first_name = $3,
            second_name = $4,
            age_group = $5,
            sex = $6,
            email = $7,
            phone = $8,
            linkedin = $9,
            occupation = $10,
            group_team_name = $11,
            num_participants = $12,
            members = $13,
            organisation = $14,
            city = $15,
            country = $16,
            source_id = $17,
            last_updated = NOW()
        WHERE id = $1
        RETURNING {}
        "#,
        COACHEE_COLUMNS
    );

    let f = &changes.fields;
    sqlx::query_as::<_, CoacheeRow>(&sql)
        .bind(id)
        .bind(&changes.kind)
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
        .fetch_optional(pool)
        .await
}

/// Delete a coachee by id, returning the number of rows removed.
/// Sessions referencing the coachee are left in place.
pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM coachees WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
