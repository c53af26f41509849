//! Serves the generated OpenAPI document.
//!
//! The `servers` entry is derived from the incoming request so "Try it out"
//! in Swagger UI targets whatever host the caller reached us on, including
//! behind a TLS-terminating proxy.

use axum::{
    extract::ConnectInfo,
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};

use crate::app::LocalPort;
use crate::openapi::document_for;
use crate::ApiError;

/// Serve OpenAPI JSON spec
pub async fn openapi_json(
    local: Option<ConnectInfo<LocalPort>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    Json(document_for(&request_base_url(&headers, local_port(local))))
}

/// Serve OpenAPI YAML spec
pub async fn openapi_yaml(
    local: Option<ConnectInfo<LocalPort>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let yaml = document_for(&request_base_url(&headers, local_port(local)))
        .to_yaml()
        .map_err(|e| ApiError::Internal(format!("OpenAPI YAML rendering failed: {}", e)))?;
    Ok(([(header::CONTENT_TYPE, "application/yaml")], yaml))
}

fn local_port(local: Option<ConnectInfo<LocalPort>>) -> Option<u16> {
    local.and_then(|ConnectInfo(LocalPort(port))| port)
}

/// `scheme://host[:port]` as seen by the client.
///
/// Scheme comes from the first `X-Forwarded-Proto` value (default `http`),
/// host from `X-Forwarded-Host` or `Host` (default `localhost`). A `Host`
/// header without a port gets the local listening port appended unless that
/// port is the scheme's default. A forwarded host is used as is.
pub fn request_base_url(headers: &HeaderMap, local_port: Option<u16>) -> String {
    let first_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    let scheme = first_value("x-forwarded-proto").unwrap_or("http");
    if let Some(host) = first_value("x-forwarded-host") {
        return format!("{}://{}", scheme, host);
    }

    let host = first_value(header::HOST.as_str()).unwrap_or("localhost");
    let default_port = match scheme {
        "https" => 443,
        _ => 80,
    };
    match local_port {
        Some(port) if !has_port(host) && port != default_port => {
            format!("{}://{}:{}", scheme, host, port)
        }
        _ => format!("{}://{}", scheme, host),
    }
}

/// True when `host` already names a port (`name:80`, `[::1]:80`).
fn has_port(host: &str) -> bool {
    match host.rfind(']') {
        Some(end) => host[end..].contains(':'),
        None => host.contains(':'),
    }
}
