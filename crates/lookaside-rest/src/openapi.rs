//! OpenAPI documentation configuration.

use crate::controllers::{HealthResponse, ReadinessResponse};
use lookaside_core::ErrorResponse;
use lookaside_service::{CacheStatus, CachedUserView, OrderView, UserLookupResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the Lookaside API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lookaside API",
        version = "1.0.0",
        description = "Cache-aside and direct user lookups with timing",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::lookup_controller::get_user_cached,
        crate::controllers::lookup_controller::get_user_direct,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            UserLookupResponse,
            CachedUserView,
            OrderView,
            CacheStatus,
            ErrorResponse,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "lookup", description = "User lookups through the cache or the store"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_lookup_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/cache/{id}"));
        assert!(doc.paths.paths.contains_key("/db/{id}"));
        assert!(doc.paths.paths.contains_key("/ready"));
    }
}
