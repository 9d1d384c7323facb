//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into one spec served at
//! `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fallsense API",
        version = "0.1.0",
        description = "Fall-prevention ROI calculator, page section content, and research publication metrics.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        // ROI
        crate::routes::roi::get_defaults,
        crate::routes::roi::calculate,
        crate::routes::roi::sync,
        // Content
        crate::routes::content::list_sections,
        crate::routes::content::get_section,
        crate::routes::content::put_section,
        // Publications
        crate::routes::publications::list_publications,
        crate::routes::publications::publication_metrics,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::roi::CalculateRequest,
        crate::routes::roi::CalculateResponse,
        crate::routes::roi::RoiSummary,
        crate::routes::roi::RoiDefaultsResponse,
        crate::routes::roi::SyncRequest,
        crate::routes::roi::SyncResponse,
        crate::routes::content::SectionResponse,
        crate::routes::content::SectionListResponse,
        crate::routes::publications::PublicationListResponse,
        crate::routes::publications::PublicationMetricsResponse,
    )),
    tags(
        (name = "roi", description = "Fall-prevention ROI calculator"),
        (name = "content", description = "Page section content"),
        (name = "publications", description = "Research publications"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_every_route() {
        let spec = ApiDoc::openapi();
        let paths: Vec<&str> = spec.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/v1/roi/defaults",
            "/v1/roi/calculate",
            "/v1/roi/sync",
            "/v1/content",
            "/v1/content/{section_key}",
            "/v1/publications",
            "/v1/publications/metrics",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn spec_serializes() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert_eq!(json["info"]["title"], "Fallsense API");
        assert!(json["components"]["schemas"]["CalculateRequest"].is_object());
    }
}
