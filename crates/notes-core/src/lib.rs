//! # notes-core
//!
//! Core types, traits, and abstractions for the notes service.
//!
//! This crate provides the note data model, the request payloads accepted at
//! the service boundary, and the [`NoteRepository`] trait that storage
//! backends implement.

pub mod defaults;
pub mod error;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
