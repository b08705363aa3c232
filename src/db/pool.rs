//! Database connection pool management

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

use crate::config::Config;

/// Static schema applied on every startup; all DDL is IF NOT EXISTS guarded
const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// Create a PostgreSQL connection pool
pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    info!(
        "Connecting to PostgreSQL at {}:{}/{}...",
        config.db_host, config.db_port, config.db_name
    );

    let options = PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name);

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(600))
        .connect_with(options)
        .await?;

    info!(
        "PostgreSQL connection pool created with max {} connections",
        config.db_max_connections
    );

    Ok(pool)
}

/// Apply the static schema. Runs before the server accepts traffic;
/// a failure here must abort startup.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Applying database schema...");

    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;

    info!("Database schema applied");

    Ok(())
}

/// Health check for the database
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
