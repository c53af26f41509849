//! HTTP handler modules for notes-api.

pub mod docs;
pub mod health;
pub mod notes;
