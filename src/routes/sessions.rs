//! Session API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::db::repository::sessions;
use crate::error::AppError;
use crate::models::session::{NewSession, Session, UpdateSession};
use crate::routes::AppState;

/// GET /api/sessions - most recent event first, ties by creation time
pub async fn list_sessions(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = sessions::list_all(&state.pool).await?;
    let sessions: Vec<Session> = rows.into_iter().map(Into::into).collect();

    Ok(Json(sessions))
}

/// POST /api/sessions - create a session with a caller-assigned id
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewSession>,
) -> Result<impl IntoResponse, AppError> {
    let row = sessions::insert(&state.pool, &payload).await?;

    tracing::info!("Created session {} for coachee {}", row.id, row.coachee_id);

    Ok((StatusCode::CREATED, Json(Session::from(row))))
}

/// PUT /api/sessions/:id - full replace of the mutable fields
pub async fn update_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateSession>,
) -> Result<impl IntoResponse, AppError> {
    let row = sessions::update(&state.pool, &id, &payload)
        .await?
        .ok_or(AppError::NotFound("Session"))?;

    Ok(Json(Session::from(row)))
}

/// DELETE /api/sessions/:id
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = sessions::delete(&state.pool, &id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Session"));
    }

    Ok(StatusCode::NO_CONTENT)
}
