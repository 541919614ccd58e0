//! API error types with IntoResponse
//!
//! Errors become short `text/plain` bodies with the matching status code.
//! Storage failures are logged and answered with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use devmind_core::ValidationError;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed body or path (400)
    BadRequest(String),

    /// Body decoded but is missing a required field (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Body exceeds the configured limit (413)
    PayloadTooLarge,

    /// Unique key already taken (409)
    Conflict { resource: &'static str, key: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn invalid_json() -> Self {
        Self::BadRequest("Invalid JSON".into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(message) => message,
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource, id } => format!("{} {} not found", resource, id),
            Self::Conflict { resource, key } => {
                format!("{} '{}' already exists", resource, key)
            }
            Self::PayloadTooLarge => "Request body too large".to_owned(),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                "an internal error occurred".to_owned()
            }
        };

        (status, message).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Conflict { resource, key } => Self::Conflict { resource, key },
            _ => Self::Database(e),
        }
    }
}
