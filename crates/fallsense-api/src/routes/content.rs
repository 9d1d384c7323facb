//! # Section Content API
//!
//! - **GET `/v1/content`**: list stored section keys
//! - **GET `/v1/content/{section_key}`**: fetch one section
//! - **PUT `/v1/content/{section_key}`**: insert or replace one section
//!
//! Any JSON value may be stored. Sections the service reads back through a
//! typed view (`roi_calculator`, `publications`) are checked on write so a
//! bad edit is rejected with 422 instead of breaking later reads.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use fallsense_content::{normalize_section, require, SectionContent};
use fallsense_core::SectionKey;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// A stored section.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    pub key: String,
    #[schema(value_type = Object)]
    pub content: serde_json::Value,
    /// RFC 3339 UTC timestamp of the last write.
    pub updated_at: String,
}

impl From<SectionContent> for SectionResponse {
    fn from(row: SectionContent) -> Self {
        Self {
            key: row.key.into(),
            content: row.content,
            updated_at: row.updated_at.to_iso8601(),
        }
    }
}

/// Stored section keys, ascending.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SectionListResponse {
    pub keys: Vec<String>,
}

/// Build the content router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/content", get(list_sections))
        .route(
            "/v1/content/{section_key}",
            get(get_section).put(put_section),
        )
}

/// GET /v1/content: List stored section keys.
#[utoipa::path(
    get,
    path = "/v1/content",
    responses(
        (status = 200, description = "Section keys", body = SectionListResponse),
    ),
    tag = "content"
)]
pub async fn list_sections(State(state): State<AppState>) -> Json<SectionListResponse> {
    Json(SectionListResponse {
        keys: state.content.keys().into_iter().map(String::from).collect(),
    })
}

/// GET /v1/content/{section_key}: Fetch one section.
#[utoipa::path(
    get,
    path = "/v1/content/{section_key}",
    params(("section_key" = String, Path, description = "Section key slug")),
    responses(
        (status = 200, description = "Stored section", body = SectionResponse),
        (status = 404, description = "No such section", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid section key", body = crate::error::ErrorBody),
    ),
    tag = "content"
)]
pub async fn get_section(
    State(state): State<AppState>,
    Path(section_key): Path<String>,
) -> Result<Json<SectionResponse>, AppError> {
    let key = SectionKey::new(section_key)?;
    let row = require(state.content.as_ref(), &key)?;
    Ok(Json(row.into()))
}

/// PUT /v1/content/{section_key}: Insert or replace one section.
#[utoipa::path(
    put,
    path = "/v1/content/{section_key}",
    params(("section_key" = String, Path, description = "Section key slug")),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Stored section", body = SectionResponse),
        (status = 400, description = "Body is not JSON", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid key or section shape", body = crate::error::ErrorBody),
    ),
    tag = "content"
)]
pub async fn put_section(
    State(state): State<AppState>,
    Path(section_key): Path<String>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<SectionResponse>, AppError> {
    let key = SectionKey::new(section_key)?;
    let content = extract_json(body)?;
    let content =
        normalize_section(&key, content).map_err(|e| AppError::Validation(e.to_string()))?;
    let row = state.content.upsert(key, content);
    tracing::info!(key = %row.key, "section updated");
    Ok(Json(row.into()))
}
