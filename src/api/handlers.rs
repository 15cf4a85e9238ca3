//! HTTP API handlers.

use axum::{extract::State, http::header, response::IntoResponse, Json};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use utoipa::ToSchema;

/// Greeting returned by `GET /`.
pub const GREETING: &str = "Hello from FastAPI!";

/// Status returned by `GET /health`.
pub const HEALTHY: &str = "healthy";

/// Application state shared with handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Prometheus handle; `/metrics` is only routed when present.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state without metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create app state that exposes the given Prometheus handle.
    pub fn with_metrics(handle: PrometheusHandle) -> Self {
        Self {
            metrics: Some(handle),
        }
    }
}

/// Root response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Fixed greeting.
    #[schema(example = "Hello from FastAPI!")]
    pub message: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy".
    #[schema(example = "healthy")]
    pub status: &'static str,
}

/// Root handler - returns the fixed greeting.
#[utoipa::path(
    get,
    path = "/",
    tag = "greeting",
    responses((status = 200, description = "Fixed greeting", body = MessageResponse))
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse { message: GREETING })
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: HEALTHY })
}

/// Prometheus scrape handler.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = state
        .metrics
        .as_ref()
        .map(PrometheusHandle::render)
        .unwrap_or_default();

    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
}
