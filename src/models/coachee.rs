use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coachee as returned by the API.
///
/// The attribute set is polymorphic on `type` (Individual, Group or Team);
/// fields that do not apply to the coachee's type stay null. The type is
/// stored as a plain string, any value is accepted and persisted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coachee {
    pub id: String,
    #[serde(rename = "type")]
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

/// Payload for POST /api/coachees and for seed entries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCoachee {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub fields: CoacheeFields,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Payload for PUT /api/coachees/:id - full replace of the mutable fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCoachee {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub fields: CoacheeFields,
}

/// The mutable, all-optional attribute set shared by create and update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoacheeFields {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub second_name: Option<String>,
    #[serde(default)]
    pub age_group: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub group_team_name: Option<String>,
    #[serde(default)]
    pub num_participants: Option<i32>,
    #[serde(default)]
    pub members: Option<String>,
    #[serde(default)]
    pub organisation: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_as_type() {
        let payload: NewCoachee = serde_json::from_str(
            r#"{"id":"c1","type":"Group","groupTeamName":"Cohort","numParticipants":10}"#,
        )
        .unwrap();
        assert_eq!(payload.kind, "Group");
        assert_eq!(payload.fields.group_team_name.as_deref(), Some("Cohort"));
        assert_eq!(payload.fields.num_participants, Some(10));
        assert!(payload.fields.first_name.is_none());

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], "Group");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn unknown_type_strings_are_accepted() {
        let payload: NewCoachee =
            serde_json::from_str(r#"{"id":"c1","type":"Cohort"}"#).unwrap();
        assert_eq!(payload.kind, "Cohort");
    }
}
