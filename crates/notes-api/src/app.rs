//! Router construction and server lifecycle.

use std::any::Any;
use std::time::Duration;

use axum::{
    extract::{connect_info::Connected, DefaultBodyLimit},
    http::{header, Method},
    serve::IncomingStream,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa_swagger_ui::{Config, SwaggerUi};
use uuid::Uuid;

use crate::config::CorsOrigins;
use crate::handlers::{docs, health, notes};
use crate::{ApiConfig, ApiError, AppState};

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// CONNECTION INFO
// =============================================================================

/// Port of the local socket a connection arrived on.
///
/// Only present when serving through [`serve`]; in-process requests carry no
/// connection info.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalPort(pub Option<u16>);

impl Connected<IncomingStream<'_>> for LocalPort {
    fn connect_info(stream: IncomingStream<'_>) -> Self {
        LocalPort(stream.local_addr().ok().map(|addr| addr.port()))
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Build the full application router with middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let body_limit = state.config.max_body_bytes;

    Router::new()
        // Health check
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // OpenAPI / Swagger UI
        .merge(
            SwaggerUi::new("/docs").config(
                Config::new(["/openapi.json"])
                    .try_it_out_enabled(true)
                    .display_request_duration(true),
            ),
        )
        .route("/openapi.json", get(docs::openapi_json))
        .route("/openapi.yaml", get(docs::openapi_yaml))
        // Notes CRUD
        .route("/api/notes", get(notes::list_notes).post(notes::create_note))
        .route(
            "/api/notes/:id",
            get(notes::get_note)
                .put(notes::update_note)
                .patch(notes::update_note)
                .delete(notes::delete_note),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(cors)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .with_state(state)
}

/// CORS policy: fixed methods and headers, origins from configuration.
pub fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins = match &config.cors_origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => AllowOrigin::list(list.clone()),
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600))
}

/// A panicking handler becomes a generic 500; the process keeps serving.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}

// =============================================================================
// LIFECYCLE
// =============================================================================

/// Bind and serve until Ctrl+C or SIGTERM.
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.bind_addr();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service_with_connect_info::<LocalPort>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on the first shutdown signal. A handler that cannot be
/// installed simply never fires.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }
}
