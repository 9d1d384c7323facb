//! # Content Errors

use fallsense_core::SectionKey;
use thiserror::Error;

/// Failure reading typed content out of the store.
#[derive(Error, Debug)]
pub enum ContentError {
    /// No section is stored under this key.
    #[error("section not found: {0}")]
    NotFound(SectionKey),

    /// The stored JSON does not have the expected shape.
    #[error("section {key} is malformed: {reason}")]
    Malformed {
        /// Key of the offending section.
        key: SectionKey,
        /// Deserialization or validation failure.
        reason: String,
    },
}

impl ContentError {
    pub(crate) fn malformed(key: &SectionKey, err: impl std::fmt::Display) -> Self {
        Self::Malformed {
            key: key.clone(),
            reason: err.to_string(),
        }
    }
}
