//! Core traits for note storage.

use async_trait::async_trait;

use crate::{NewNote, Note, NotePatch, Result};

// =============================================================================
// NOTE REPOSITORY TRAIT
// =============================================================================

/// Repository for note CRUD operations.
///
/// Implementations hold no business rules: input reaching the repository has
/// already been validated and normalized by the service layer. Identifiers are
/// compared by exact string equality.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List all notes in insertion order.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Fetch a note by ID. A missing note is `Ok(None)`, not an error.
    async fn fetch(&self, id: &str) -> Result<Option<Note>>;

    /// Insert a new note, assigning the next id and both timestamps.
    async fn insert(&self, note: NewNote) -> Result<Note>;

    /// Apply a partial update and refresh `updated_at`.
    ///
    /// Returns `Error::NoteNotFound` if no note has this id.
    async fn update(&self, id: &str, patch: NotePatch) -> Result<Note>;

    /// Permanently delete a note, returning its last state.
    ///
    /// Returns `Error::NoteNotFound` if no note has this id.
    async fn remove(&self, id: &str) -> Result<Note>;

    /// Number of stored notes.
    async fn count(&self) -> Result<usize>;
}
