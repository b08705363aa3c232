//! Database row types for PostgreSQL
//!
//! These types map directly to database rows; the `From` impls into the API
//! types in `models/` are the row mappers: camelCase renaming happens via
//! serde on the API side, while absent text becomes an empty string and an
//! absent theme becomes an empty list here.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::models::{Coachee, Session, Source};

/// Source row from database
#[derive(Debug, Clone, FromRow)]
pub struct SourceRow {
    pub id: String,
    pub name: String,
    pub country: Option<String>,
    pub website: Option<String>,
    pub created_on: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<SourceRow> for Source {
    fn from(row: SourceRow) -> Self {
        Source {
            id: row.id,
            name: row.name,
            country: row.country.unwrap_or_default(),
            website: row.website.unwrap_or_default(),
            created_on: row.created_on,
            last_updated: row.last_updated,
        }
    }
}

/// Coachee row from database
#[derive(Debug, Clone, FromRow)]
pub struct CoacheeRow {
    pub id: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub first_name: Option<String>,
    pub second_name: Option<String>,
    pub age_group: Option<String>,
    pub sex: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub occupation: Option<String>,
    pub group_team_name: Option<String>,
    pub num_participants: Option<i32>,
    pub members: Option<String>,
    pub organisation: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub source_id: Option<String>,
    pub created_on: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<CoacheeRow> for Coachee {
    fn from(row: CoacheeRow) -> Self {
        Coachee {
            id: row.id,
            kind: row.kind,
            first_name: row.first_name,
            second_name: row.second_name,
            age_group: row.age_group,
            sex: row.sex,
            email: row.email,
            phone: row.phone,
            linkedin: row.linkedin,
            occupation: row.occupation,
            group_team_name: row.group_team_name,
            num_participants: row.num_participants,
            members: row.members,
            organisation: row.organisation,
            city: row.city,
            country: row.country,
            source_id: row.source_id,
            created_on: row.created_on,
            last_updated: row.last_updated,
        }
    }
}

/// Session row from database
#[derive(Debug, Clone, FromRow)]
pub struct SessionRow {
    pub id: String,
    pub coachee_id: String,
    pub coachee_type: String,
    pub session_date: NaiveDate,
    pub duration: f64,
    pub theme: Option<Json<Vec<String>>>,
    pub payment_type: String,
    pub notes: Option<String>,
    pub created_on: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Session {
            id: row.id,
            coachee_id: row.coachee_id,
            coachee_type: row.coachee_type,
            session_date: row.session_date,
            duration: row.duration,
            theme: row.theme.map(|Json(tags)| tags).unwrap_or_default(),
            payment_type: row.payment_type,
            notes: row.notes.unwrap_or_default(),
            created_on: row.created_on,
            last_updated: row.last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_row(country: Option<&str>, website: Option<&str>) -> SourceRow {
        SourceRow {
            id: "s1".to_string(),
            name: "Referral".to_string(),
            country: country.map(str::to_string),
            website: website.map(str::to_string),
            created_on: Utc::now(),
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn absent_source_text_maps_to_empty_string() {
        let source = Source::from(source_row(None, None));
        assert_eq!(source.country, "");
        assert_eq!(source.website, "");
    }

    #[test]
    fn present_source_text_passes_through() {
        let source = Source::from(source_row(Some("India"), Some("https://example.com")));
        assert_eq!(source.country, "India");
        assert_eq!(source.website, "https://example.com");
    }

    #[test]
    fn absent_theme_maps_to_empty_list() {
        let row = SessionRow {
            id: "sess1".to_string(),
            coachee_id: "c1".to_string(),
            coachee_type: "Individual".to_string(),
            session_date: NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(),
            duration: 1.0,
            theme: None,
            payment_type: "Pro Bono".to_string(),
            notes: None,
            created_on: Utc::now(),
            last_updated: Utc::now(),
        };

        let session = Session::from(row);
        assert!(session.theme.is_empty());
        assert_eq!(session.notes, "");
        assert_eq!(session.duration, 1.0);
    }

    #[test]
    fn stored_theme_passes_through_in_order() {
        let row = SessionRow {
            id: "sess1".to_string(),
            coachee_id: "c1".to_string(),
            coachee_type: "Group".to_string(),
            session_date: NaiveDate::from_ymd_opt(2026, 1, 28).unwrap(),
            duration: 2.0,
            theme: Some(Json(vec![
                "Leadership".to_string(),
                "Other Professional".to_string(),
            ])),
            payment_type: "Paid".to_string(),
            notes: Some("Cohort leadership workshop".to_string()),
            created_on: Utc::now(),
            last_updated: Utc::now(),
        };

        let session = Session::from(row);
        assert_eq!(session.theme, ["Leadership", "Other Professional"]);
        assert_eq!(session.notes, "Cohort leadership workshop");
    }
}
