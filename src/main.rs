use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coaching_tracker_server::config::Config;
use coaching_tracker_server::db::{create_pool, init_schema};
use coaching_tracker_server::routes::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coaching_tracker_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Config::from_env();
    let port = config.port;

    tracing::info!(
        "Starting Coaching Tracker Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Connect and apply the schema before accepting any traffic.
    // Either step failing aborts startup with a non-zero exit.
    let pool = create_pool(&config).await?;
    tracing::info!("PostgreSQL connected");

    init_schema(&pool).await?;

    // Build application state and router
    let state = Arc::new(AppState { config, pool });
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
