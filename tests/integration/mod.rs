//! Integration tests for the greeting service.
//!
//! Each test binds a real listener on an ephemeral port and talks to it over
//! HTTP with reqwest.
//! Run with: cargo test --test integration

use std::net::SocketAddr;

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinSet;

use greeter::api::{app, AppState};
use greeter::config::Config;

/// Spawn the full application and return its address.
async fn spawn_server(config: Config) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(AppState::new(), &config);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

/// GET / returns the exact greeting body.
#[tokio::test]
async fn test_root_returns_greeting() {
    let addr = spawn_server(Config::default()).await;

    let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"message":"Hello from FastAPI!"}"#
    );
}

/// GET /health returns the exact status body.
#[tokio::test]
async fn test_health_returns_healthy() {
    let addr = spawn_server(Config::default()).await;

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "healthy" }));
}

/// Unregistered paths never answer 200.
#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let addr = spawn_server(Config::default()).await;

    for path in ["/missing", "/health/extra", "/api"] {
        let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {path}");
    }
}

/// Registered paths reject other methods.
#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let addr = spawn_server(Config::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{addr}/"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

/// Concurrent calls in any order all see identical bodies.
#[tokio::test]
async fn test_concurrent_requests_are_idempotent() {
    let addr = spawn_server(Config::default()).await;
    let client = reqwest::Client::new();

    let mut tasks = JoinSet::new();
    for i in 0..32 {
        let client = client.clone();
        let path = if i % 2 == 0 { "/" } else { "/health" };
        tasks.spawn(async move {
            let response = client
                .get(format!("http://{addr}{path}"))
                .send()
                .await
                .unwrap();
            (path, response.status(), response.text().await.unwrap())
        });
    }

    while let Some(result) = tasks.join_next().await {
        let (path, status, body) = result.unwrap();
        assert_eq!(status, StatusCode::OK);
        let expected = if path == "/" {
            r#"{"message":"Hello from FastAPI!"}"#
        } else {
            r#"{"status":"healthy"}"#
        };
        assert_eq!(body, expected);
    }
}

/// The OpenAPI document is reachable when docs are enabled.
#[tokio::test]
async fn test_openapi_document_served() {
    let addr = spawn_server(Config::default()).await;

    let response = reqwest::get(format!("http://{addr}/openapi.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let doc: Value = response.json().await.unwrap();
    assert!(doc["paths"]["/"]["get"].is_object());
    assert!(doc["paths"]["/health"]["get"].is_object());
}
