use axum::{extract::State, Json};

use crate::api_types::HealthResponse;
use crate::AppState;

/// Liveness check.
#[utoipa::path(get, path = "/health", tag = "System",
    responses((status = 200, description = "Service health check passed", body = HealthResponse)))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Service is healthy",
        timestamp: chrono::Utc::now(),
        environment: state.config.environment.clone(),
    })
}

/// Root path, same body as `/health`.
#[utoipa::path(get, path = "/", tag = "System",
    responses((status = 200, description = "Service health check passed", body = HealthResponse)))]
pub async fn root(state: State<AppState>) -> Json<HealthResponse> {
    health_check(state).await
}
