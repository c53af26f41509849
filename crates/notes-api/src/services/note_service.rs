//! Note service: validation and normalization in front of the repository.
//!
//! The repository stays a plain storage primitive; every business rule about
//! note input lives here, so a different backend can be injected without
//! duplicating validation.

use std::sync::Arc;

use tracing::{debug, info};

use notes_core::{
    CreateNoteRequest, Error, FieldValue, NewNote, Note, NotePatch, NoteRepository, Result,
    UpdateNoteRequest,
};

pub const TITLE_REQUIRED: &str =
    "Validation failed: \"title\" is required and must be a non-empty string.";
pub const UPDATE_FIELDS_REQUIRED: &str =
    "Validation failed: provide \"title\" and/or \"content\" to update.";
pub const TITLE_INVALID: &str =
    "Validation failed: \"title\" must be a non-empty string when provided.";

/// Service for note CRUD with input validation.
#[derive(Clone)]
pub struct NoteService {
    repo: Arc<dyn NoteRepository>,
}

impl NoteService {
    /// Create a service over the given repository.
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    /// All notes in insertion order.
    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        let notes = self.repo.list().await?;
        debug!(op = "list_notes", result_count = notes.len(), "Listed notes");
        Ok(notes)
    }

    /// Look up a note. `Ok(None)` when it does not exist; the caller decides
    /// how to report that.
    pub async fn get_note(&self, id: &str) -> Result<Option<Note>> {
        let note = self.repo.fetch(id).await?;
        debug!(op = "get_note", note_id = %id, found = note.is_some(), "Fetched note");
        Ok(note)
    }

    /// Validate and create a note.
    pub async fn create_note(&self, req: CreateNoteRequest) -> Result<Note> {
        let title = req
            .title
            .as_ref()
            .and_then(non_empty_trimmed)
            .ok_or_else(|| reject("create_note", TITLE_REQUIRED))?;
        let content = req
            .content
            .and_then(FieldValue::into_text)
            .unwrap_or_default();

        let note = self.repo.insert(NewNote { title, content }).await?;
        info!(op = "create_note", note_id = %note.id, "Note created");
        Ok(note)
    }

    /// Validate and apply a partial update.
    pub async fn update_note(&self, id: &str, req: UpdateNoteRequest) -> Result<Note> {
        if req.title.is_none() && req.content.is_none() {
            return Err(reject("update_note", UPDATE_FIELDS_REQUIRED));
        }

        let title = match &req.title {
            Some(value) => Some(
                non_empty_trimmed(value).ok_or_else(|| reject("update_note", TITLE_INVALID))?,
            ),
            None => None,
        };
        // Non-text content is accepted but not merged.
        let content = req.content.and_then(FieldValue::into_text);

        let note = self
            .repo
            .update(id, NotePatch { title, content })
            .await
            .inspect_err(|e| debug!(op = "update_note", note_id = %id, error = %e, "Update failed"))?;
        info!(op = "update_note", note_id = %id, "Note updated");
        Ok(note)
    }

    /// Permanently delete a note, returning its last state.
    pub async fn delete_note(&self, id: &str) -> Result<Note> {
        let note = self
            .repo
            .remove(id)
            .await
            .inspect_err(|e| debug!(op = "delete_note", note_id = %id, error = %e, "Delete failed"))?;
        info!(op = "delete_note", note_id = %id, "Note deleted");
        Ok(note)
    }

    /// Number of stored notes.
    pub async fn count(&self) -> Result<usize> {
        self.repo.count().await
    }
}

/// Trimmed text of a field, if it is a string that is non-empty after trimming.
fn non_empty_trimmed(value: &FieldValue) -> Option<String> {
    value
        .as_text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn reject(op: &'static str, msg: &str) -> Error {
    debug!(op, error = msg, "Validation rejected request");
    Error::validation(msg)
}
