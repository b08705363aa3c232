use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Coaching session as returned by the API.
///
/// `coacheeType` is a snapshot of the coachee's type taken when the session
/// was recorded; it is never re-synced against the coachee row and may drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub coachee_id: String,
    pub coachee_type: String,
    pub session_date: NaiveDate,
    pub duration: f64,
    pub theme: Vec<String>,
    pub payment_type: String,
    pub notes: String,
    pub created_on: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Payload for POST /api/sessions and for seed entries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub id: String,
    pub coachee_id: String,
    pub coachee_type: String,
    pub session_date: NaiveDate,
    pub duration: f64,
    #[serde(default)]
    pub theme: Option<Vec<String>>,
    pub payment_type: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Payload for PUT /api/sessions/:id - full replace of the mutable fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSession {
    pub coachee_id: String,
    pub coachee_type: String,
    pub session_date: NaiveDate,
    pub duration: f64,
    #[serde(default)]
    pub theme: Option<Vec<String>>,
    pub payment_type: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_date_serializes_as_plain_date() {
        let session = Session {
            id: "sess1".to_string(),
            coachee_id: "c1".to_string(),
            coachee_type: "Individual".to_string(),
            session_date: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
            duration: 1.5,
            theme: vec!["Career".to_string()],
            payment_type: "Paid".to_string(),
            notes: String::new(),
            created_on: Utc::now(),
            last_updated: Utc::now(),
        };

        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["sessionDate"], "2026-01-20");
        assert_eq!(value["duration"], 1.5);
        assert_eq!(value["coacheeId"], "c1");
        assert!(value["theme"].is_array());
    }

    #[test]
    fn new_session_defaults_theme_and_notes() {
        let payload: NewSession = serde_json::from_str(
            r#"{"id":"sess1","coacheeId":"c1","coacheeType":"Individual",
                "sessionDate":"2026-01-20","duration":1.0,"paymentType":"Peer"}"#,
        )
        .unwrap();
        assert!(payload.theme.is_none());
        assert!(payload.notes.is_none());
        assert_eq!(payload.session_date, NaiveDate::from_ymd_opt(2026, 1, 20).unwrap());
    }
}
