//! OpenAPI document generated from the handler annotations.

use utoipa::openapi::server::Server;
use utoipa::OpenApi;

use crate::api_types::{HealthResponse, NoteListResponse, NoteResponse};
use crate::error::ErrorResponse;
use crate::handlers::{health, notes};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes App API",
        version = "1.0.0",
        description = "RESTful API for managing notes (CRUD) with health check"
    ),
    paths(
        health::root,
        health::health_check,
        notes::list_notes,
        notes::get_note,
        notes::create_note,
        notes::update_note,
        notes::delete_note,
    ),
    components(schemas(
        notes_core::Note,
        notes_core::CreateNoteRequest,
        notes_core::UpdateNoteRequest,
        NoteResponse,
        NoteListResponse,
        HealthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Notes", description = "Notes CRUD operations"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

/// Build the document with a single server entry pointing at `base_url`.
pub fn document_for(base_url: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(base_url)]);
    doc
}
