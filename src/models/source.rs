use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source (lead-generation channel) as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: String,
    pub name: String,
    pub country: String,
    pub website: String,
    pub created_on: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Payload for POST /api/sources and for seed entries.
///
/// The id is caller-assigned; timestamps default to NOW() when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSource {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Payload for PUT /api/sources/:id - full replace of the mutable fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSource {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_serializes_camel_case() {
        let source = Source {
            id: "s1".to_string(),
            name: "Referral".to_string(),
            country: String::new(),
            website: String::new(),
            created_on: Utc::now(),
            last_updated: Utc::now(),
        };

        let value = serde_json::to_value(&source).unwrap();
        assert_eq!(value["id"], "s1");
        assert_eq!(value["country"], "");
        assert_eq!(value["website"], "");
        assert!(value.get("createdOn").is_some());
        assert!(value.get("lastUpdated").is_some());
        assert!(value.get("created_on").is_none());
    }

    #[test]
    fn new_source_accepts_minimal_payload() {
        let payload: NewSource =
            serde_json::from_str(r#"{"id":"s1","name":"Referral"}"#).unwrap();
        assert_eq!(payload.id, "s1");
        assert!(payload.country.is_none());
        assert!(payload.created_on.is_none());
    }
}
