//! Note create/get handlers.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, error, warn};

use notepad_core::logging::{ERROR_MSG, NOTE_ID, OPERATION, SUBSYSTEM};
use notepad_core::{Note, NoteContent};

use crate::error::ApiError;
use crate::state::AppState;

/// Serialize `value` into a JSON response with the given status.
///
/// `Note` always encodes, so the 500 path is only reached by a type whose
/// `Serialize` impl fails. It stays so an encode failure is reported as
/// `{"error": ...}` rather than a panic.
fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value).map_err(notepad_core::Error::from)?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// `POST /notes`
///
/// The body is decoded by hand rather than through `Json` so that every
/// decode failure, including a missing content type, is a plain 400.
pub async fn create_note(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let info: NoteContent = serde_json::from_slice(&body).map_err(|e| {
        warn!({ SUBSYSTEM } = "api", { OPERATION } = "create_note", { ERROR_MSG } = %e, "Rejected note payload");
        ApiError::BadRequest("Failed to decode note data".to_string())
    })?;

    let note = Note::new(state.ids.next_id(), info, Utc::now());
    let id = note.id;
    state.notes.put(note.clone()).await;
    debug!({ SUBSYSTEM } = "api", { OPERATION } = "create_note", { NOTE_ID } = id, "Note created");

    // The note is already stored; a failure here only loses the response.
    json_response(StatusCode::CREATED, &note).inspect_err(|e| {
        error!({ SUBSYSTEM } = "api", { OPERATION } = "create_note", { NOTE_ID } = id, { ERROR_MSG } = ?e, "Failed to encode note data");
    })
}

/// `GET /notes/:id`
pub async fn get_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_note_id(&raw_id)?;

    let Some(note) = state.notes.get(id).await else {
        warn!({ SUBSYSTEM } = "api", { OPERATION } = "get_note", { NOTE_ID } = id, "Note not found");
        return Err(ApiError::NotFound("Note not found".to_string()));
    };
    debug!({ SUBSYSTEM } = "api", { OPERATION } = "get_note", { NOTE_ID } = id, "Note fetched");

    json_response(StatusCode::OK, &note).inspect_err(|e| {
        error!({ SUBSYSTEM } = "api", { OPERATION } = "get_note", { NOTE_ID } = id, { ERROR_MSG } = ?e, "Failed to encode note data");
    })
}

/// Parse a decimal note id path segment.
pub fn parse_note_id(raw: &str) -> notepad_core::Result<i64> {
    raw.parse::<i64>().map_err(|e| {
        warn!({ SUBSYSTEM } = "api", { OPERATION } = "get_note", id = raw, { ERROR_MSG } = %e, "Rejected note id");
        notepad_core::Error::InvalidInput("Failed to parse note id".to_string())
    })
}
