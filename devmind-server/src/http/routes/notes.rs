//! Note endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use devmind_core::{CreateNoteRequest, NewNote, Note, NoteFilter, NotePatch, NoteQuery};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, NoteId};
use crate::http::server::AppState;

/// GET /api/notes - list notes, newest first
///
/// Query: `search`, `tag`, `pinned=true`, `archived=true`. Decoded as raw
/// pairs so a repeated parameter is not a 400; the first value wins.
async fn list_notes(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let filter = NoteFilter::from(pairs.into_iter().collect::<NoteQuery>());
    let notes = state.store().list_notes(&filter).await?;
    Ok(Json(notes))
}

/// POST /api/notes - create a note, filling in defaults
async fn create_note(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateNoteRequest>,
) -> Result<Json<Note>, ApiError> {
    let note = state.store().create_note(NewNote::from(req)).await?;
    tracing::debug!(id = note.id, "note created");
    Ok(Json(note))
}

/// GET /api/notes/{id}
async fn get_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
) -> Result<Json<Note>, ApiError> {
    Ok(Json(state.store().get_note(id).await?))
}

/// PUT /api/notes/{id} - partial update
///
/// A missing note is reported as 404 before the body is looked at.
async fn update_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
    body: Result<JsonBody<NotePatch>, ApiError>,
) -> Result<Json<Note>, ApiError> {
    state.store().get_note(id).await?;
    let JsonBody(patch) = body?;

    let note = state.store().update_note(id, patch).await?;
    Ok(Json(note))
}

/// DELETE /api/notes/{id} - idempotent
async fn delete_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
) -> Result<StatusCode, ApiError> {
    state.store().delete_note(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Note routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            put(update_note).get(get_note).delete(delete_note),
        )
}
