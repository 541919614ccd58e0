//! devmind-server: HTTP API for the devmind knowledge tool
//!
//! Persists notes, tags and timelines in Postgres and exposes them as a
//! JSON API under `/api`, open to any browser origin.

pub mod config;
pub mod db;
pub mod http;
pub mod tracing_setup;

use anyhow::Context;

pub use config::{ConfigError, ServerConfig};
pub use db::{DbError, MemoryStore, PgStore, Store};
pub use http::{build_router, serve, ApiError, AppState};

/// Open the store, apply the schema and serve until shutdown.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let pool = db::pool::connect(&config)
        .await
        .context("Failed to connect to database")?;

    db::migrations::run(&pool)
        .await
        .context("Failed to apply schema migrations")?;

    let state = AppState::new(PgStore::new(pool)).with_body_limit(config.max_body_bytes);

    tracing::info!("DevMind API server starting on port {}...", config.port);
    serve(state, config.bind_addr())
        .await
        .context("Server error")?;

    Ok(())
}
