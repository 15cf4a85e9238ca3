//! Request metrics middleware.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};

use crate::metrics::record_http_request;

/// Count and time every request that reached a registered route.
///
/// Attach with `route_layer` so `MatchedPath` is populated and unmatched
/// paths never create new label values.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let response = next.run(req).await;
    record_http_request(start, &method, &path, response.status().as_u16());

    response
}
