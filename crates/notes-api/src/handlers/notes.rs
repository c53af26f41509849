//! Note CRUD HTTP handlers.
//!
//! Every success body is wrapped as `{"data": ...}`; failures go through
//! [`ApiError`] as `{"error": ...}`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use notes_core::{CreateNoteRequest, UpdateNoteRequest};

use crate::api_types::{ApiJson, NoteListResponse, NoteResponse};
use crate::error::{ErrorResponse, NOTE_NOT_FOUND};
use crate::{ApiError, AppState};

/// List all notes.
///
/// GET /api/notes
#[utoipa::path(get, path = "/api/notes", tag = "Notes",
    responses((status = 200, description = "List of notes", body = NoteListResponse)))]
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<NoteListResponse>, ApiError> {
    let data = state.notes.list_notes().await?;
    Ok(Json(NoteListResponse { data }))
}

/// Get a single note by ID.
///
/// GET /api/notes/:id
#[utoipa::path(get, path = "/api/notes/{id}", tag = "Notes",
    params(("id" = String, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)))]
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, ApiError> {
    let data = state
        .notes
        .get_note(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(NOTE_NOT_FOUND.to_string()))?;
    Ok(Json(NoteResponse { data }))
}

/// Create a new note.
///
/// POST /api/notes
#[utoipa::path(post, path = "/api/notes", tag = "Notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = NoteResponse),
        (status = 400, description = "Validation error", body = ErrorResponse)))]
pub async fn create_note(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateNoteRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
    let data = state.notes.create_note(req).await?;
    Ok((StatusCode::CREATED, Json(NoteResponse { data })))
}

/// Update an existing note. Only the fields present in the body change.
///
/// PUT /api/notes/:id (PATCH is accepted as an alias)
#[utoipa::path(put, path = "/api/notes/{id}", tag = "Notes",
    params(("id" = String, Path, description = "Note ID")),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated", body = NoteResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)))]
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateNoteRequest>,
) -> Result<Json<NoteResponse>, ApiError> {
    let data = state.notes.update_note(&id, req).await?;
    Ok(Json(NoteResponse { data }))
}

/// Delete a note by ID, returning the removed note.
///
/// DELETE /api/notes/:id
#[utoipa::path(delete, path = "/api/notes/{id}", tag = "Notes",
    params(("id" = String, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note deleted", body = NoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)))]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, ApiError> {
    let data = state.notes.delete_note(&id).await?;
    Ok(Json(NoteResponse { data }))
}
