//! Timeline endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use devmind_core::{CreateTimelineRequest, NewTimeline, Timeline, TimelinePatch};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, TimelineId};
use crate::http::server::AppState;

/// GET /api/timelines - newest first
async fn list_timelines(
    State(state): State<AppState>,
) -> Result<Json<Vec<Timeline>>, ApiError> {
    Ok(Json(state.store().list_timelines().await?))
}

/// POST /api/timelines
async fn create_timeline(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateTimelineRequest>,
) -> Result<Json<Timeline>, ApiError> {
    let timeline = NewTimeline::try_from(req)?;
    Ok(Json(state.store().create_timeline(timeline).await?))
}

/// GET /api/timelines/{id}
async fn get_timeline(
    State(state): State<AppState>,
    TimelineId(id): TimelineId,
) -> Result<Json<Timeline>, ApiError> {
    Ok(Json(state.store().get_timeline(id).await?))
}

/// PUT /api/timelines/{id} - partial update, same contract as notes
async fn update_timeline(
    State(state): State<AppState>,
    TimelineId(id): TimelineId,
    body: Result<JsonBody<TimelinePatch>, ApiError>,
) -> Result<Json<Timeline>, ApiError> {
    state.store().get_timeline(id).await?;
    let JsonBody(patch) = body?;

    Ok(Json(state.store().update_timeline(id, patch).await?))
}

/// DELETE /api/timelines/{id} - idempotent
async fn delete_timeline(
    State(state): State<AppState>,
    TimelineId(id): TimelineId,
) -> Result<StatusCode, ApiError> {
    state.store().delete_timeline(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Timeline routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/timelines", get(list_timelines).post(create_timeline))
        .route(
            "/timelines/{id}",
            put(update_timeline).get(get_timeline).delete(delete_timeline),
        )
}
