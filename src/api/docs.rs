//! OpenAPI document, Swagger UI and ReDoc.

use axum::Router;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, HealthResponse, MessageResponse};

/// Path the OpenAPI document is served at.
pub const OPENAPI_PATH: &str = "/openapi.json";
/// Path the Swagger UI is served at.
pub const DOCS_PATH: &str = "/docs";
/// Path the ReDoc page is served at.
pub const REDOC_PATH: &str = "/redoc";

/// OpenAPI document for the public routes.
#[derive(OpenApi)]
#[openapi(
    info(title = "greeter", description = "Greeting and health-check service"),
    paths(handlers::root, handlers::health),
    components(schemas(MessageResponse, HealthResponse)),
    tags(
        (name = "greeting", description = "Fixed greeting"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// Router serving the OpenAPI document, Swagger UI and ReDoc.
pub fn router() -> Router {
    let openapi = ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, openapi.clone()))
        .merge(Redoc::with_url(REDOC_PATH, openapi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_public_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/"));
        assert!(paths.contains(&"/health"));
        assert!(!paths.contains(&"/metrics"));
    }

    #[test]
    fn document_serializes() {
        let json = ApiDoc::openapi().to_pretty_json().unwrap();
        assert!(json.contains("MessageResponse"));
        assert!(json.contains("HealthResponse"));
    }
}
