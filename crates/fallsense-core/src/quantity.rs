//! # Quantity Newtypes
//!
//! Newtype wrappers for the numeric operating parameters of a facility.
//! Each type has a validated constructor; there is no way to hold a negative
//! `Money`, a NaN `Minutes`, or a `Fraction` above one.
//!
//! Constructors take the field name so the resulting [`ValidationError`]
//! points at the form field the caller filled in.
//!
//! `Money` and `Minutes` are capped at [`MAX_AMOUNT`]. With counts held in
//! `u32`, every product and sum the calculator forms from capped values stays
//! well inside the finite `f64` range.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Largest accepted `Money` or `Minutes` value.
pub const MAX_AMOUNT: f64 = 1e12;

/// Finite currency amount in `[0, MAX_AMOUNT]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(f64);

/// Finite duration in minutes, in `[0, MAX_AMOUNT]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Minutes(f64);

/// Fraction in the closed interval `[0, 1]`.
///
/// Out-of-range values are rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Fraction(f64);

impl Money {
    /// Zero currency.
    pub const ZERO: Money = Money(0.0);

    /// Validate a currency amount for `field`.
    pub fn try_new(field: &'static str, value: f64) -> Result<Self, ValidationError> {
        bounded_amount(field, value).map(Self)
    }

    /// A whole-unit amount; always valid.
    pub fn from_whole(units: u32) -> Self {
        Self(f64::from(units))
    }

    /// The amount as `f64`.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Minutes {
    /// Zero minutes.
    pub const ZERO: Minutes = Minutes(0.0);

    /// Validate a duration for `field`.
    pub fn try_new(field: &'static str, value: f64) -> Result<Self, ValidationError> {
        bounded_amount(field, value).map(Self)
    }

    /// A whole number of minutes; always valid.
    pub fn from_whole(minutes: u32) -> Self {
        Self(f64::from(minutes))
    }

    /// The duration as `f64` minutes.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The duration in hours.
    pub fn as_hours(self) -> f64 {
        self.0 / 60.0
    }
}

impl Fraction {
    /// Zero.
    pub const ZERO: Fraction = Fraction(0.0);
    /// One.
    pub const ONE: Fraction = Fraction(1.0);

    /// Validate a fraction for `field`. Values outside `[0, 1]` are rejected.
    pub fn try_new(field: &'static str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite { field });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field,
                value,
                min: 0.0,
                max: 1.0,
            });
        }
        Ok(Self(value))
    }

    /// A whole percentage, saturating at 100.
    pub fn from_percent(percent: u8) -> Self {
        Self(f64::from(percent.min(100)) / 100.0)
    }

    /// The fraction as `f64`.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The fraction as a percentage (`0.4` → `40.0`).
    pub fn as_percent(self) -> f64 {
        self.0 * 100.0
    }
}

fn bounded_amount(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    if value > MAX_AMOUNT {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: MAX_AMOUNT,
        });
    }
    // Normalise -0.0 so serialized output never shows a signed zero.
    Ok(value + 0.0)
}

impl TryFrom<f64> for Money {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new("amount", value)
    }
}

impl TryFrom<f64> for Minutes {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new("minutes", value)
    }
}

impl TryFrom<f64> for Fraction {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new("fraction", value)
    }
}

impl From<Money> for f64 {
    fn from(m: Money) -> f64 {
        m.0
    }
}

impl From<Minutes> for f64 {
    fn from(m: Minutes) -> f64 {
        m.0
    }
}

impl From<Fraction> for f64 {
    fn from(f: Fraction) -> f64 {
        f.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl std::fmt::Display for Minutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min", self.0)
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.as_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_accepts_zero_and_positive() {
        assert_eq!(Money::try_new("cost", 0.0).unwrap().value(), 0.0);
        assert_eq!(Money::try_new("cost", 30_000.0).unwrap().value(), 30_000.0);
    }

    #[test]
    fn money_rejects_negative() {
        let err = Money::try_new("avgCostPerFall", -1.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Negative {
                field: "avgCostPerFall",
                value: -1.0
            }
        );
    }

    #[test]
    fn money_rejects_non_finite() {
        assert!(matches!(
            Money::try_new("cost", f64::NAN),
            Err(ValidationError::NonFinite { field: "cost" })
        ));
        assert!(Money::try_new("cost", f64::INFINITY).is_err());
    }

    #[test]
    fn amounts_capped_at_max() {
        assert_eq!(Money::try_new("cost", MAX_AMOUNT).unwrap().value(), MAX_AMOUNT);
        let err = Money::try_new("avgCostPerFall", 1e307).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange { field: "avgCostPerFall", max, .. } if max == MAX_AMOUNT
        ));
        assert!(Minutes::try_new("minutes", MAX_AMOUNT * 2.0).is_err());
        assert!(serde_json::from_str::<Money>("1e308").is_err());
    }

    #[test]
    fn negative_zero_is_normalised() {
        let m = Money::try_new("cost", -0.0).unwrap();
        assert!(m.value().is_sign_positive());
    }

    #[test]
    fn minutes_to_hours() {
        let m = Minutes::try_new("minutes", 15.0).unwrap();
        assert_eq!(m.as_hours(), 0.25);
    }

    #[test]
    fn fraction_bounds_inclusive() {
        assert!(Fraction::try_new("p", 0.0).is_ok());
        assert!(Fraction::try_new("p", 1.0).is_ok());
        assert!(Fraction::try_new("p", 0.4).is_ok());
    }

    #[test]
    fn fraction_rejects_out_of_range() {
        let err = Fraction::try_new("percentFallsPrevented", 40.0).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { value, .. } if value == 40.0));
        assert!(Fraction::try_new("p", -0.01).is_err());
        assert!(Fraction::try_new("p", f64::NAN).is_err());
    }

    #[test]
    fn infallible_constructors() {
        assert_eq!(Money::from_whole(75_000).value(), 75_000.0);
        assert_eq!(Minutes::from_whole(15).value(), 15.0);
        assert_eq!(Fraction::from_percent(40).value(), 0.4);
        assert_eq!(Fraction::from_percent(250), Fraction::ONE);
    }

    #[test]
    fn fraction_percent_display() {
        let f = Fraction::try_new("p", 0.25).unwrap();
        assert_eq!(f.as_percent(), 25.0);
        assert_eq!(f.to_string(), "25%");
    }

    #[test]
    fn serde_rejects_invalid_values() {
        assert!(serde_json::from_str::<Money>("-5").is_err());
        assert!(serde_json::from_str::<Fraction>("1.01").is_err());
        let m: Money = serde_json::from_str("12.5").unwrap();
        assert_eq!(serde_json::to_string(&m).unwrap(), "12.5");
    }
}
