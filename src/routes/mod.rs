//! HTTP routes and router assembly

pub mod coachees;
pub mod health;
pub mod seed;
pub mod sessions;
pub mod sources;

use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::Config;

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
}

/// Build the full application router.
///
/// Unmatched paths (everything outside /api) fall through to the static
/// front-end, with index.html as the catch-all entry file.
pub fn create_router(state: Arc<AppState>) -> Router {
    let index_file = Path::new(&state.config.static_dir).join("index.html");
    let static_files =
        ServeDir::new(&state.config.static_dir).fallback(ServeFile::new(index_file));

    Router::new()
        .route("/api/health", get(health::health_check))
        // Sources
        .route(
            "/api/sources",
            get(sources::list_sources).post(sources::create_source),
        )
        .route(
            "/api/sources/:id",
            put(sources::update_source).delete(sources::delete_source),
        )
        // Coachees
        .route(
            "/api/coachees",
            get(coachees::list_coachees).post(coachees::create_coachee),
        )
        .route(
            "/api/coachees/:id",
            put(coachees::update_coachee).delete(coachees::delete_coachee),
        )
        // Sessions
        .route(
            "/api/sessions",
            get(sessions::list_sessions).post(sessions::create_session),
        )
        .route(
            "/api/sessions/:id",
            put(sessions::update_session).delete(sessions::delete_session),
        )
        // Demo seed
        .route("/api/seed-demo", post(seed::seed_demo))
        // Static front-end
        .fallback_service(static_files)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
