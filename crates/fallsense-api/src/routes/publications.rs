//! # Research Publications API
//!
//! Read-only views over the `publications` section. Edits go through
//! `PUT /v1/content/publications`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use fallsense_content::{load_publications, sorted_by_recency, Publication, PublicationMetrics};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::AppState;

/// Publications, newest first.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublicationListResponse {
    #[schema(value_type = Vec<Object>)]
    pub publications: Vec<Publication>,
}

/// Headline numbers for the research page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicationMetricsResponse {
    pub total_publications: usize,
    pub total_citations: u64,
    pub h_index: u32,
}

impl From<PublicationMetrics> for PublicationMetricsResponse {
    fn from(m: PublicationMetrics) -> Self {
        Self {
            total_publications: m.total_publications,
            total_citations: m.total_citations,
            h_index: m.h_index,
        }
    }
}

/// Build the publications router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/publications", get(list_publications))
        .route("/v1/publications/metrics", get(publication_metrics))
}

/// GET /v1/publications: Publications, newest first.
#[utoipa::path(
    get,
    path = "/v1/publications",
    responses(
        (status = 200, description = "Publication list", body = PublicationListResponse),
        (status = 500, description = "Stored list is malformed", body = crate::error::ErrorBody),
    ),
    tag = "publications"
)]
pub async fn list_publications(
    State(state): State<AppState>,
) -> Result<Json<PublicationListResponse>, AppError> {
    let publications = load_publications(state.content.as_ref())?;
    Ok(Json(PublicationListResponse {
        publications: sorted_by_recency(publications),
    }))
}

/// GET /v1/publications/metrics: Count, citations and h-index.
#[utoipa::path(
    get,
    path = "/v1/publications/metrics",
    responses(
        (status = 200, description = "Publication metrics", body = PublicationMetricsResponse),
        (status = 500, description = "Stored list is malformed", body = crate::error::ErrorBody),
    ),
    tag = "publications"
)]
pub async fn publication_metrics(
    State(state): State<AppState>,
) -> Result<Json<PublicationMetricsResponse>, AppError> {
    let publications = load_publications(state.content.as_ref())?;
    Ok(Json(
        PublicationMetrics::from_publications(&publications).into(),
    ))
}
