//! # Section Keys
//!
//! Content rows are addressed by a `SectionKey`: a lowercase slug of 1–64
//! characters from `[a-z0-9_-]`, starting with a letter. Keys arrive from URL
//! paths and seed files, so the constructor is the only way in.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum length of a section key.
pub const MAX_SECTION_KEY_LEN: usize = 64;

/// Validated identifier of a content section.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionKey(String);

impl SectionKey {
    /// Section holding the ROI calculator copy and default inputs.
    pub const ROI_CALCULATOR: &'static str = "roi_calculator";
    /// Section holding the research publication list.
    pub const PUBLICATIONS: &'static str = "publications";
    /// Landing-page hero banner.
    pub const HERO: &'static str = "hero";
    /// Feature comparison table.
    pub const FEATURE_COMPARISON: &'static str = "feature_comparison";

    /// Validate and wrap a section key.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        let reason = if key.is_empty() {
            Some("must not be empty")
        } else if key.len() > MAX_SECTION_KEY_LEN {
            Some("must be at most 64 characters")
        } else if !key.starts_with(|c: char| c.is_ascii_lowercase()) {
            Some("must start with a lowercase letter")
        } else if !key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
        {
            Some("may only contain a-z, 0-9, '_' and '-'")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ValidationError::InvalidSectionKey { key, reason }),
            None => Ok(Self(key)),
        }
    }

    /// Key of the ROI calculator section.
    pub fn roi_calculator() -> Self {
        Self(Self::ROI_CALCULATOR.to_string())
    }

    /// Key of the publications section.
    pub fn publications() -> Self {
        Self(Self::PUBLICATIONS.to_string())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SectionKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::str::FromStr for SectionKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<SectionKey> for String {
    fn from(key: SectionKey) -> String {
        key.0
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
