//! # ROI Calculator API
//!
//! - **GET `/v1/roi/defaults`**: initial form values and calculator copy
//! - **POST `/v1/roi/calculate`**: project savings for a set of inputs
//! - **POST `/v1/roi/sync`**: apply one edit to the residents/falls/rate triple
//!
//! Calculate requests are partial: omitted fields take the values configured
//! in the `roi_calculator` section (or the built-in reference facility).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use fallsense_content::{load_typed, roi_defaults, RoiSectionContent};
use fallsense_core::SectionKey;
use fallsense_roi::report::{format_currency, format_percent, format_years};
use fallsense_roi::{
    compute_roi, sync_derived_fields, CalculatorInputs, CalculatorResults, DerivedFields,
    InputField, RawInputs,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::{extract_json, extract_validated_json, Validate};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// Calculator inputs as typed into the form. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CalculateRequest {
    pub number_of_residents: Option<f64>,
    pub falls_per_year: Option<f64>,
    pub avg_cost_per_fall: Option<f64>,
    pub staff_hourly_rate: Option<f64>,
    pub avg_minutes_saved_per_incident: Option<f64>,
    pub insurance_premium_per_year: Option<f64>,
    pub legal_liability_cost_per_year: Option<f64>,
    /// Share of falls prevented, in `[0, 1]`.
    pub percent_falls_prevented: Option<f64>,
    pub initial_installation_cost: Option<f64>,
    pub annual_subscription_cost: Option<f64>,
}

impl CalculateRequest {
    fn provided(&self) -> impl Iterator<Item = (InputField, f64)> {
        [
            (InputField::NumberOfResidents, self.number_of_residents),
            (InputField::FallsPerYear, self.falls_per_year),
            (InputField::AvgCostPerFall, self.avg_cost_per_fall),
            (InputField::StaffHourlyRate, self.staff_hourly_rate),
            (
                InputField::AvgMinutesSavedPerIncident,
                self.avg_minutes_saved_per_incident,
            ),
            (InputField::InsurancePremiumPerYear, self.insurance_premium_per_year),
            (
                InputField::LegalLiabilityCostPerYear,
                self.legal_liability_cost_per_year,
            ),
            (InputField::PercentFallsPrevented, self.percent_falls_prevented),
            (InputField::InitialInstallationCost, self.initial_installation_cost),
            (InputField::AnnualSubscriptionCost, self.annual_subscription_cost),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }

    /// Overlay the provided fields on `base` and validate the result.
    pub fn resolve(&self, base: CalculatorInputs) -> Result<CalculatorInputs, AppError> {
        let mut raw = RawInputs::from(base);
        for (field, value) in self.provided() {
            raw.set(field, value);
        }
        Ok(raw.validate()?)
    }
}

/// Display strings for the headline figures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoiSummary {
    pub total_annual_savings: String,
    pub payback_period: String,
    #[serde(rename = "threeYearROI")]
    pub three_year_roi: String,
}

impl From<&CalculatorResults> for RoiSummary {
    fn from(r: &CalculatorResults) -> Self {
        Self {
            total_annual_savings: format_currency(r.total_annual_savings),
            payback_period: format_years(r.payback_period_years),
            three_year_roi: format_percent(r.three_year_roi),
        }
    }
}

/// Result of one calculation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    /// The validated inputs the projection was computed from.
    #[schema(value_type = Object)]
    pub inputs: CalculatorInputs,
    #[schema(value_type = Object)]
    pub results: CalculatorResults,
    /// Running net savings at the end of years 1, 2 and 3.
    pub cumulative_net: Vec<f64>,
    pub summary: RoiSummary,
}

/// Initial calculator state for the page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoiDefaultsResponse {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[schema(value_type = Object)]
    pub inputs: CalculatorInputs,
    pub falls_per_resident_rate: f64,
}

/// One edit to the coupled residents/falls/rate triple.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SyncRequest {
    /// Current triple.
    #[schema(value_type = Object)]
    pub state: DerivedFields,
    /// Edited field name, e.g. `numberOfResidents`.
    #[schema(value_type = String)]
    pub field: InputField,
    /// Raw value typed into the field.
    pub value: f64,
}

/// Triple after the edit, in the same shape as [`SyncRequest::state`].
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SyncResponse {
    #[schema(value_type = Object)]
    pub state: DerivedFields,
}

impl Validate for SyncRequest {
    fn validate(&self) -> Result<(), String> {
        if self.state.number_of_residents == 0 {
            return Err("state.numberOfResidents must be at least 1".to_string());
        }
        let rate = self.state.falls_per_resident_rate;
        if !rate.is_finite() || rate < 0.0 {
            return Err("state.fallsPerResidentRate must be a non-negative number".to_string());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the ROI router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/roi/defaults", get(get_defaults))
        .route("/v1/roi/calculate", post(calculate))
        .route("/v1/roi/sync", post(sync))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /v1/roi/defaults: Initial inputs and copy for the calculator.
#[utoipa::path(
    get,
    path = "/v1/roi/defaults",
    responses(
        (status = 200, description = "Default calculator state", body = RoiDefaultsResponse),
        (status = 500, description = "Stored calculator section is malformed", body = crate::error::ErrorBody),
    ),
    tag = "roi"
)]
pub async fn get_defaults(
    State(state): State<AppState>,
) -> Result<Json<RoiDefaultsResponse>, AppError> {
    let store = state.content.as_ref();
    let inputs = roi_defaults(store)?;
    let copy: RoiSectionContent =
        load_typed(store, &SectionKey::roi_calculator())?.unwrap_or_default();
    Ok(Json(RoiDefaultsResponse {
        title: copy.title,
        subtitle: copy.subtitle,
        falls_per_resident_rate: DerivedFields::from_inputs(&inputs).falls_per_resident_rate,
        inputs,
    }))
}

/// POST /v1/roi/calculate: Project savings, payback and three-year ROI.
#[utoipa::path(
    post,
    path = "/v1/roi/calculate",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Projection", body = CalculateResponse),
        (status = 400, description = "Malformed body or unknown field", body = crate::error::ErrorBody),
        (status = 422, description = "Input out of range", body = crate::error::ErrorBody),
    ),
    tag = "roi"
)]
pub async fn calculate(
    State(state): State<AppState>,
    body: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, AppError> {
    let req = extract_json(body)?;
    let inputs = req.resolve(roi_defaults(state.content.as_ref())?)?;
    let results = compute_roi(&inputs);
    tracing::debug!(
        residents = inputs.number_of_residents(),
        total_annual_savings = results.total_annual_savings,
        "roi calculated"
    );
    Ok(Json(CalculateResponse {
        inputs,
        cumulative_net: results.cumulative_net().to_vec(),
        summary: RoiSummary::from(&results),
        results,
    }))
}

/// POST /v1/roi/sync: Keep residents, falls per year and rate consistent.
#[utoipa::path(
    post,
    path = "/v1/roi/sync",
    request_body = SyncRequest,
    responses(
        (status = 200, description = "Updated triple", body = SyncResponse),
        (status = 400, description = "Malformed body or unknown field", body = crate::error::ErrorBody),
        (status = 422, description = "Inconsistent state", body = crate::error::ErrorBody),
    ),
    tag = "roi"
)]
pub async fn sync(
    body: Result<Json<SyncRequest>, JsonRejection>,
) -> Result<Json<SyncResponse>, AppError> {
    let req = extract_validated_json(body)?;
    Ok(Json(SyncResponse {
        state: sync_derived_fields(req.state, req.field, req.value),
    }))
}
