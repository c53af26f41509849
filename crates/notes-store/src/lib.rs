//! # notes-store
//!
//! Storage layer for the notes service.
//!
//! This crate provides [`MemoryNoteRepository`], an in-memory implementation
//! of [`notes_core::NoteRepository`]. It keeps no state across restarts.
//!
//! ## Example
//!
//! ```rust,ignore
//! use notes_store::{MemoryNoteRepository, NewNote, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> notes_core::Result<()> {
//!     let repo = MemoryNoteRepository::seeded();
//!
//!     let note = repo.insert(NewNote {
//!         title: "Buy milk".to_string(),
//!         content: String::new(),
//!     }).await?;
//!
//!     assert_eq!(note.id, "3");
//!     Ok(())
//! }
//! ```

pub mod memory;

pub use memory::MemoryNoteRepository;

// Re-export core types
pub use notes_core::*;
