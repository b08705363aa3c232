//! Demo seed endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::repository::seed;
use crate::error::AppError;
use crate::models::coachee::NewCoachee;
use crate::models::session::NewSession;
use crate::models::source::NewSource;
use crate::routes::AppState;

/// Request body for POST /api/seed-demo; any batch may be absent
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedRequest {
    pub sources: Vec<NewSource>,
    pub coachees: Vec<NewCoachee>,
    pub sessions: Vec<NewSession>,
}

/// POST /api/seed-demo - idempotent bulk insert in one transaction.
///
/// Responds with a bare acknowledgment; callers re-list the collections
/// to observe the effect.
pub async fn seed_demo(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SeedRequest>,
) -> Result<impl IntoResponse, AppError> {
    seed::apply(
        &state.pool,
        &payload.sources,
        &payload.coachees,
        &payload.sessions,
    )
    .await?;

    tracing::info!(
        sources = payload.sources.len(),
        coachees = payload.coachees.len(),
        sessions = payload.sessions.len(),
        "Demo seed applied"
    );

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "ok": true }))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_batches_default_to_empty() {
        let request: SeedRequest = serde_json::from_str("{}").unwrap();
        assert!(request.sources.is_empty());
        assert!(request.coachees.is_empty());
        assert!(request.sessions.is_empty());
    }

    #[test]
    fn parses_a_sources_only_payload() {
        let request: SeedRequest =
            serde_json::from_str(r#"{"sources":[{"id":"s1","name":"Referral"}]}"#).unwrap();
        assert_eq!(request.sources.len(), 1);
        assert_eq!(request.sources[0].id, "s1");
    }
}
