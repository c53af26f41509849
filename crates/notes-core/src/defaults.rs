//! Centralized default constants for the notes service.
//!
//! Every crate references these instead of defining its own literals.

// =============================================================================
// SERVER
// =============================================================================

/// Default bind address.
pub const HOST: &str = "0.0.0.0";

/// Default bind port.
pub const PORT: u16 = 3000;

/// Environment name reported by the health endpoint when `APP_ENV` is unset.
pub const ENVIRONMENT: &str = "development";

/// Maximum accepted request body size (1 MiB).
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// LOGGING
// =============================================================================

/// Tracing filter used when `RUST_LOG` is unset.
pub const LOG_FILTER: &str = "notes_api=debug,notes_store=debug,tower_http=debug";

/// Log file name used when `LOG_FILE` points at a directory-less name.
pub const LOG_FILE_NAME: &str = "notes-api.log";

// =============================================================================
// SEED DATA
// =============================================================================

/// Fixture notes loaded into a fresh in-memory store, as `(title, content)`.
///
/// They receive ids `"1"` and `"2"`.
pub const SEED_NOTES: [(&str, &str); 2] = [
    (
        "Welcome to Notes",
        "This is a sample note. You can create, edit, and delete notes.",
    ),
    ("Getting Started", "Use POST /api/notes to add a new note."),
];
