//! Source API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::db::repository::sources;
use crate::error::AppError;
use crate::models::source::{NewSource, Source, UpdateSource};
use crate::routes::AppState;

/// GET /api/sources - all sources, oldest first
pub async fn list_sources(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = sources::list_all(&state.pool).await?;
    let sources: Vec<Source> = rows.into_iter().map(Into::into).collect();

    Ok(Json(sources))
}

/// POST /api/sources - create a source with a caller-assigned id
pub async fn create_source(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewSource>,
) -> Result<impl IntoResponse, AppError> {
    let row = sources::insert(&state.pool, &payload).await?;

    tracing::info!("Created source {}", row.id);

    Ok((StatusCode::CREATED, Json(Source::from(row))))
}

/// PUT /api/sources/:id - full replace of the mutable fields
pub async fn update_source(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateSource>,
) -> Result<impl IntoResponse, AppError> {
    let row = sources::update(&state.pool, &id, &payload)
        .await?
        .ok_or(AppError::NotFound("Source"))?;

    Ok(Json(Source::from(row)))
}

/// DELETE /api/sources/:id
pub async fn delete_source(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = sources::delete(&state.pool, &id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Source"));
    }

    Ok(StatusCode::NO_CONTENT)
}
