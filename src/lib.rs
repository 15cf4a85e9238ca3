//! Greeting and health-check HTTP service.
//!
//! Two fixed JSON routes served by axum:
//!
//! ```text
//! GET /        -> {"message":"Hello from FastAPI!"}
//! GET /health  -> {"status":"healthy"}
//! ```
//!
//! Everything else in the crate is the service around them.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP handlers, router, request metrics and OpenAPI docs
//! - [`metrics`]: Prometheus recorder and metric helpers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
