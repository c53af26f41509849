//! Request extractors and response envelopes shared by the handlers.

use axum::extract::FromRequest;
use serde::Serialize;

use notes_core::Note;

use crate::ApiError;

/// JSON body extractor whose rejections become `400 {"error": ...}`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `{"data": Note}` envelope.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct NoteResponse {
    pub data: Note,
}

/// `{"data": [Note]}` envelope.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct NoteListResponse {
    pub data: Vec<Note>,
}

/// Liveness report.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
    #[schema(example = "Service is healthy")]
    pub message: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[schema(example = "development")]
    pub environment: String,
}
