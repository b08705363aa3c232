//! Coachee API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::db::repository::coachees;
use crate::error::AppError;
use crate::models::coachee::{Coachee, NewCoachee, UpdateCoachee};
use crate::routes::AppState;

/// GET /api/coachees - all coachees, oldest first
pub async fn list_coachees(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = coachees::list_all(&state.pool).await?;
    let coachees: Vec<Coachee> = rows.into_iter().map(Into::into).collect();

    Ok(Json(coachees))
}

/// POST /api/coachees - create a coachee with a caller-assigned id
pub async fn create_coachee(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewCoachee>,
) -> Result<impl IntoResponse, AppError> {
    let row = coachees::insert(&state.pool, &payload).await?;

    tracing::info!("Created coachee {} ({})", row.id, row.kind);

    Ok((StatusCode::CREATED, Json(Coachee::from(row))))
}

/// PUT /api/coachees/:id - full replace of the mutable fields
pub async fn update_coachee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCoachee>,
) -> Result<impl IntoResponse, AppError> {
    let row = coachees::update(&state.pool, &id, &payload)
        .await?
        .ok_or(AppError::NotFound("Coachee"))?;

    Ok(Json(Coachee::from(row)))
}

/// DELETE /api/coachees/:id - sessions referencing the coachee are kept
pub async fn delete_coachee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = coachees::delete(&state.pool, &id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Coachee"));
    }

    Ok(StatusCode::NO_CONTENT)
}
