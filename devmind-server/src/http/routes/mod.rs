//! Route handlers organized by resource
//!
//! - health: liveness and database reachability
//! - notes: filtered list, create, partial update, delete
//! - tags: list, create, delete
//! - timelines: list, create, partial update, delete

pub mod health;
pub mod notes;
pub mod tags;
pub mod timelines;

use axum::Router;

use super::server::AppState;

/// API routes: /api/*
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(notes::router())
        .merge(tags::router())
        .merge(timelines::router())
}
