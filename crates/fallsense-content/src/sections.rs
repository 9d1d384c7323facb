//! # Typed Section Views
//!
//! Helpers for reading sections with a known shape out of a
//! [`ContentStore`]. The ROI calculator section carries display copy plus an
//! optional partial `defaults` object that is overlaid on the built-in
//! reference facility.

use fallsense_core::SectionKey;
use fallsense_roi::CalculatorInputs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ContentError;
use crate::publications::Publication;
use crate::store::{ContentStore, SectionContent};

/// Fetch a section, failing with [`ContentError::NotFound`] when absent.
pub fn require(store: &dyn ContentStore, key: &SectionKey) -> Result<SectionContent, ContentError> {
    store
        .get(key)
        .ok_or_else(|| ContentError::NotFound(key.clone()))
}

/// Fetch a section and deserialize it as `T`. Absent sections yield `None`.
pub fn load_typed<T: DeserializeOwned>(
    store: &dyn ContentStore,
    key: &SectionKey,
) -> Result<Option<T>, ContentError> {
    match store.get(key) {
        Some(row) => serde_json::from_value(row.content)
            .map(Some)
            .map_err(|e| ContentError::malformed(key, e)),
        None => Ok(None),
    }
}

/// Copy and default inputs shown with the ROI calculator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiSectionContent {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Partial calculator inputs; omitted fields keep built-in defaults.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub defaults: Map<String, Value>,
}

impl RoiSectionContent {
    /// Overlay `defaults` on the reference facility and validate the result.
    pub fn default_inputs(&self) -> Result<CalculatorInputs, serde_json::Error> {
        serde_json::from_value(Value::Object(self.defaults.clone()))
    }
}

/// Default calculator inputs as configured in the `roi_calculator` section.
///
/// Falls back to [`CalculatorInputs::default`] when the section is absent.
pub fn roi_defaults(store: &dyn ContentStore) -> Result<CalculatorInputs, ContentError> {
    let key = SectionKey::roi_calculator();
    match load_typed::<RoiSectionContent>(store, &key)? {
        Some(section) => section
            .default_inputs()
            .map_err(|e| ContentError::malformed(&key, e)),
        None => Ok(CalculatorInputs::default()),
    }
}

/// Check `content` against the shape expected under `key` and return the
/// value to store.
///
/// Only the sections read back through typed views are checked. Any JSON is
/// accepted under other keys and stored as given. The `publications` list is
/// stored in parsed form, so a record written without an `id` keeps the one
/// assigned here on every later read.
pub fn normalize_section(key: &SectionKey, content: Value) -> Result<Value, ContentError> {
    match key.as_str() {
        SectionKey::ROI_CALCULATOR => {
            let section: RoiSectionContent = serde_json::from_value(content.clone())
                .map_err(|e| ContentError::malformed(key, e))?;
            section
                .default_inputs()
                .map_err(|e| ContentError::malformed(key, e))?;
            Ok(content)
        }
        SectionKey::PUBLICATIONS => {
            let publications: Vec<Publication> =
                serde_json::from_value(content).map_err(|e| ContentError::malformed(key, e))?;
            serde_json::to_value(publications).map_err(|e| ContentError::malformed(key, e))
        }
        _ => Ok(content),
    }
}
