//! Tag endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use devmind_core::{CreateTagRequest, NewTag, Tag};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, TagId};
use crate::http::server::AppState;

/// GET /api/tags - all tags in insertion order
async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<Tag>>, ApiError> {
    Ok(Json(state.store().list_tags().await?))
}

/// POST /api/tags - create a tag; a taken name is 409
async fn create_tag(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateTagRequest>,
) -> Result<Json<Tag>, ApiError> {
    let tag = NewTag::try_from(req)?;
    Ok(Json(state.store().create_tag(tag).await?))
}

/// DELETE /api/tags/{id} - idempotent
async fn delete_tag(
    State(state): State<AppState>,
    TagId(id): TagId,
) -> Result<StatusCode, ApiError> {
    state.store().delete_tag(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Tag routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tags", get(list_tags).post(create_tag))
        .route("/tags/{id}", delete(delete_tag))
}
