//! OpenAPI documentation for the well API at `/api/*`.

use utoipa::OpenApi;

use crate::api;
use crate::api::models::{errors::ErrorResponse, health::HealthResponse, wells::WellDetailResponse, wells::WellSummary};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Well Data API",
        description = "Read-only access to well records and their stimulation history for the map frontend."
    ),
    servers(
        (url = "/api", description = "Well data API")
    ),
    paths(
        api::handlers::health::health,
        api::handlers::wells::list_wells,
        api::handlers::wells::get_well,
    ),
    components(schemas(HealthResponse, WellSummary, WellDetailResponse, ErrorResponse)),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "wells", description = "Well markers and well detail"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let mut paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        paths.sort();

        assert_eq!(paths, vec!["/health", "/wells", "/wells/{id}"]);
    }

    #[test]
    fn test_document_has_payload_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components should be present").schemas;

        for name in ["HealthResponse", "WellSummary", "WellDetailResponse", "ErrorResponse"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
