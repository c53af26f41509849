//! End-to-end tests against a real listener.
//!
//! Test Pattern:
//! - Spawns the router with `axum::serve` on `127.0.0.1:0`, with local-port
//!   connection info as in production
//! - Talks to it over HTTP with reqwest

use axum::http::HeaderValue;
use notes_api::app::LocalPort;
use notes_api::config::CorsOrigins;
use notes_api::{build_router, ApiConfig, AppState};
use serde_json::{json, Value};

async fn spawn_test_server(config: ApiConfig) -> String {
    let router = build_router(AppState::in_memory(config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<LocalPort>(),
        )
        .await
        .unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_over_http() {
    let base_url = spawn_test_server(ApiConfig::default()).await;

    let response = reqwest::get(format!("{}/health", base_url)).await.unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.headers().contains_key("x-request-id"));

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_openapi_server_url_gains_local_port() {
    let base_url = spawn_test_server(ApiConfig::default()).await;
    let port = base_url.rsplit(':').next().unwrap().to_string();

    let response = reqwest::Client::new()
        .get(format!("{}/openapi.json", base_url))
        .header("Host", "localhost")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let doc: Value = response.json().await.unwrap();
    assert_eq!(
        doc["servers"][0]["url"],
        format!("http://localhost:{}", port)
    );
}

#[tokio::test]
async fn test_crud_roundtrip_over_http() {
    let base_url = spawn_test_server(ApiConfig::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/notes", base_url))
        .json(&json!({ "title": "Call mom", "content": "Sunday" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = client
        .put(format!("{}/api/notes/{}", base_url, id))
        .json(&json!({ "title": "Call mom and dad" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["data"]["title"], "Call mom and dad");
    assert_eq!(updated["data"]["content"], "Sunday");

    let response = client
        .delete(format!("{}/api/notes/{}", base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/api/notes/{}", base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_cors_preflight_with_origin_list() {
    let config = ApiConfig {
        cors_origins: CorsOrigins::List(vec![HeaderValue::from_static(
            "https://app.example.com",
        )]),
        ..ApiConfig::default()
    };
    let base_url = spawn_test_server(config).await;
    let client = reqwest::Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, format!("{}/api/notes/1", base_url))
        .header("Origin", "https://app.example.com")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "https://app.example.com"
    );
    let methods = headers["access-control-allow-methods"].to_str().unwrap();
    assert!(methods.contains("PUT"));
    assert!(methods.contains("DELETE"));
}

#[tokio::test]
async fn test_cors_rejects_unlisted_origin() {
    let config = ApiConfig {
        cors_origins: CorsOrigins::List(vec![HeaderValue::from_static(
            "https://app.example.com",
        )]),
        ..ApiConfig::default()
    };
    let base_url = spawn_test_server(config).await;

    let response = reqwest::Client::new()
        .get(format!("{}/api/notes", base_url))
        .header("Origin", "https://evil.example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert!(!response
        .headers()
        .contains_key("access-control-allow-origin"));
}
