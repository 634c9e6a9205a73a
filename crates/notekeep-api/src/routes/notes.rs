//! # Notes API
//!
//! Routes (all behind the bearer-token guard):
//! - GET    /api/items       — list every note, oldest first
//! - POST   /api/items       — create a note
//! - PUT    /api/items/{id}  — replace a note's content
//! - DELETE /api/items/{id}  — remove a note
//!
//! Any authenticated caller may touch any note; there is no ownership.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use notekeep_core::{Note, NoteError, NoteId, Timestamp};

use crate::auth::CallerIdentity;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json_or_default;
use crate::state::AppState;

/// Body of create and update requests.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct NoteContentRequest {
    /// Note text. Surrounding whitespace is trimmed; must not end up empty.
    pub content: Option<String>,
}

/// Build the notes router. The caller is responsible for layering auth.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(list_notes)
                .post(create_note)
                .fallback(super::route_not_found),
        )
        .route(
            "/items/{id}",
            put(update_note)
                .delete(delete_note)
                .fallback(super::route_not_found),
        )
}

/// A path segment that is not a note id cannot name a stored note.
fn parse_note_id(raw: &str) -> Result<NoteId, AppError> {
    raw.parse().map_err(|_| NoteError::NotFound.into())
}

/// GET /api/items — List all notes.
#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "All notes in insertion order", body = [Note]),
        (status = 401, description = "No bearer token", body = ErrorBody),
        (status = 403, description = "Invalid or expired token", body = ErrorBody),
    ),
    tag = "notes"
)]
pub async fn list_notes(
    State(state): State<AppState>,
    _caller: CallerIdentity,
) -> Json<Vec<Note>> {
    Json(state.notes.list())
}

/// POST /api/items — Create a note.
#[utoipa::path(
    post,
    path = "/api/items",
    request_body = NoteContentRequest,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 400, description = "Content missing or blank", body = ErrorBody),
        (status = 413, description = "Request body too large", body = ErrorBody),
        (status = 401, description = "No bearer token", body = ErrorBody),
        (status = 403, description = "Invalid or expired token", body = ErrorBody),
    ),
    tag = "notes"
)]
pub async fn create_note(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    body: Result<Json<NoteContentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let req = json_or_default(body)?;
    let note = state.notes.create(req.content.as_deref(), Timestamp::now())?;
    tracing::info!(note_id = %note.id, user = %caller.username, "note created");
    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /api/items/{id} — Replace a note's content.
///
/// Content is validated before the id is looked up.
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(("id" = u64, Path, description = "Note ID")),
    request_body = NoteContentRequest,
    responses(
        (status = 200, description = "Note updated", body = Note),
        (status = 400, description = "Content missing or blank", body = ErrorBody),
        (status = 413, description = "Request body too large", body = ErrorBody),
        (status = 401, description = "No bearer token", body = ErrorBody),
        (status = 403, description = "Invalid or expired token", body = ErrorBody),
        (status = 404, description = "No such note", body = ErrorBody),
    ),
    tag = "notes"
)]
pub async fn update_note(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
    body: Result<Json<NoteContentRequest>, JsonRejection>,
) -> Result<Json<Note>, AppError> {
    let req = json_or_default(body)?;
    let content = notekeep_core::validate_content(req.content.as_deref())?;
    let id = parse_note_id(&id)?;
    let note = state.notes.update(id, Some(content.as_str()), Timestamp::now())?;
    tracing::info!(note_id = %note.id, user = %caller.username, "note updated");
    Ok(Json(note))
}

/// DELETE /api/items/{id} — Remove a note.
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(("id" = u64, Path, description = "Note ID")),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 401, description = "No bearer token", body = ErrorBody),
        (status = 403, description = "Invalid or expired token", body = ErrorBody),
        (status = 404, description = "No such note", body = ErrorBody),
    ),
    tag = "notes"
)]
pub async fn delete_note(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_note_id(&id)?;
    state.notes.delete(id)?;
    tracing::info!(note_id = %id, user = %caller.username, "note deleted");
    Ok(StatusCode::NO_CONTENT)
}
