//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::docs;
use super::handlers::{health, metrics, root, AppState};
use super::middleware::track_metrics;
use crate::config::Config;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(root))
        .route("/health", get(health));

    if state.metrics.is_some() {
        router = router.route("/metrics", get(metrics));
    }

    router
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Create the full application: API routes, optional docs, request tracing.
pub fn app(state: AppState, config: &Config) -> Router {
    let mut router = create_router(state);

    if config.docs_enabled {
        router = router.merge(docs::router());
    }

    router.layer(TraceLayer::new_for_http())
}
