//! # fallsense-api: HTTP Service
//!
//! Serves the ROI calculator, its derived-field synchronizer, the page
//! section store and research publication metrics to the website.
//!
//! ## API Surface
//!
//! | Prefix               | Module                     | Domain               |
//! |----------------------|----------------------------|----------------------|
//! | `/v1/roi/*`          | [`routes::roi`]            | ROI calculator       |
//! | `/v1/content/*`      | [`routes::content`]        | Page sections        |
//! | `/v1/publications/*` | [`routes::publications`]   | Research             |
//! | `/openapi.json`      | [`openapi`]                | Generated spec       |
//!
//! ## Middleware Stack (outermost first)
//!
//! ```text
//! TraceLayer → CorsLayer → DefaultBodyLimit → Handler
//! ```

pub mod bootstrap;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Maximum accepted request body, in bytes.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::roi::router())
        .merge(routes::content::router())
        .merge(routes::publications::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new().merge(health).merge(api)
}

/// The calculator is embedded in public pages served from other origins.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Liveness probe: 200 while the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: 200 once state is bootstrapped.
async fn readiness() -> &'static str {
    "ready"
}
