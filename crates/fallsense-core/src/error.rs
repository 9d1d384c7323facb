//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types shared across the Fallsense workspace. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation errors name the offending field and the rejected value.
//! - Division by zero is never an error: it is handled by
//!   [`crate::guarded_ratio`] and only shows up in debug logs.

use thiserror::Error;

/// Top-level error type for Fallsense.
#[derive(Error, Debug)]
pub enum FallsenseError {
    /// A caller-supplied value failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A caller input that cannot be used by the calculator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Value is below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Name of the rejected field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Name of the rejected field.
        field: &'static str,
    },

    /// Value is outside its permitted closed interval.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Name of the rejected field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// A count that is used as a divisor was zero.
    #[error("{field} must be at least 1")]
    ZeroCount {
        /// Name of the rejected field.
        field: &'static str,
    },

    /// A count had a fractional part or exceeds the supported range.
    #[error("{field} must be a whole number, got {value}")]
    NotWholeNumber {
        /// Name of the rejected field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A content section key is not a valid slug.
    #[error("invalid section key {key:?}: {reason}")]
    InvalidSectionKey {
        /// The rejected key.
        key: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl ValidationError {
    /// The field the error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Negative { field, .. }
            | Self::NonFinite { field }
            | Self::OutOfRange { field, .. }
            | Self::ZeroCount { field }
            | Self::NotWholeNumber { field, .. } => Some(*field),
            Self::InvalidSectionKey { .. } => None,
        }
    }
}
