//! Error types for the notes service.

use thiserror::Error;

/// Result type alias using the notes service's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for note operations.
///
/// Each variant carries its classification, so the HTTP boundary maps on the
/// variant and never inspects the message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Caller sent malformed or incomplete input
    #[error("{0}")]
    Validation(String),

    /// Note with the given id does not exist
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Shorthand for a validation failure.
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let err = Error::validation("Validation failed: bad title");
        assert_eq!(err.to_string(), "Validation failed: bad title");
    }

    #[test]
    fn test_error_display_note_not_found() {
        let err = Error::NoteNotFound("42".to_string());
        assert_eq!(err.to_string(), "Note not found: 42");
    }

    #[test]
    fn test_error_display_internal() {
        let err = Error::Internal("unexpected state".to_string());
        assert_eq!(err.to_string(), "Internal error: unexpected state");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
