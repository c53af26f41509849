//! notes-api - HTTP API server for the notes service
//!
//! The binary in `main.rs` only sets up logging and binds the listener; the
//! router, handlers and service live here so tests can drive the full stack.

pub mod api_types;
pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod services;

use std::sync::Arc;

use notes_core::NoteRepository;
use notes_store::MemoryNoteRepository;

pub use app::build_router;
pub use config::ApiConfig;
pub use error::ApiError;
pub use services::NoteService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub notes: NoteService,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// State over an explicit repository.
    pub fn new(repo: Arc<dyn NoteRepository>, config: ApiConfig) -> Self {
        Self {
            notes: NoteService::new(repo),
            config: Arc::new(config),
        }
    }

    /// State over a fresh in-memory store holding the fixture notes.
    pub fn in_memory(config: ApiConfig) -> Self {
        Self::new(Arc::new(MemoryNoteRepository::seeded()), config)
    }
}
