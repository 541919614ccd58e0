//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS envelope on every response
//! - Request tracing
//! - Graceful shutdown
//! - Plain-text error responses

pub mod cors;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, serve, AppState, ServerError};
