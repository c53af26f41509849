//! HTTP error mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Message returned for any 404 on a note.
pub const NOTE_NOT_FOUND: &str = "Note not found";

/// Message returned for any 500; details stay in the server log.
pub const INTERNAL_ERROR: &str = "Internal Server Error";

/// Error body for every non-2xx JSON response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Note not found")]
    pub error: String,
}

/// API-level error, classified by HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<notes_core::Error> for ApiError {
    fn from(err: notes_core::Error) -> Self {
        match err {
            notes_core::Error::Validation(msg) => ApiError::BadRequest(msg),
            notes_core::Error::NoteNotFound(_) => ApiError::NotFound(NOTE_NOT_FOUND.to_string()),
            notes_core::Error::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::PayloadTooLarge(msg) => msg,
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed with internal error");
                INTERNAL_ERROR.to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
