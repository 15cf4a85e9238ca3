//! HTTP API module: greeting, health, metrics and docs endpoints.

pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::AppState;
pub use routes::{app, create_router};
