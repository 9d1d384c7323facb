//! # Derived-Field Synchronization
//!
//! Residents, falls per year, and the falls-per-resident rate are coupled:
//!
//! - editing **residents** rescales falls per year with the remembered rate;
//! - editing **falls per year** re-derives the rate;
//! - editing anything else leaves all three untouched.
//!
//! The state is an explicit value ([`DerivedFields`], or the whole
//! [`CalculatorForm`]) passed through pure transition functions, so every
//! edit can be replayed and tested without a UI.

use fallsense_core::{guarded_ratio, OnZero, ValidationError};
use serde::{Deserialize, Serialize};

use crate::calculator::{compute_roi, CalculatorResults};
use crate::inputs::{CalculatorInputs, InputField};

/// The coupled triple kept consistent across edits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedFields {
    pub number_of_residents: u32,
    pub falls_per_year: u32,
    /// Falls per resident as of the last edit to either count.
    pub falls_per_resident_rate: f64,
}

impl DerivedFields {
    /// Start tracking from two counts. Residents below one are raised to one.
    pub fn new(number_of_residents: u32, falls_per_year: u32) -> Self {
        let number_of_residents = number_of_residents.max(1);
        Self {
            number_of_residents,
            falls_per_year,
            falls_per_resident_rate: rate(falls_per_year, number_of_residents),
        }
    }

    /// Start tracking from an input snapshot.
    pub fn from_inputs(inputs: &CalculatorInputs) -> Self {
        Self::new(inputs.number_of_residents(), inputs.falls_per_year())
    }
}

/// Apply one edit to the coupled triple.
///
/// `new_value` is the raw number typed into `edited_field`. Counts are
/// rounded; negative or non-finite counts become zero, and residents are
/// clamped to at least one.
pub fn sync_derived_fields(state: DerivedFields, edited_field: InputField, new_value: f64) -> DerivedFields {
    match edited_field {
        InputField::NumberOfResidents => {
            let residents = to_count(new_value).max(1);
            let falls = to_count(state.falls_per_resident_rate * f64::from(residents));
            DerivedFields {
                number_of_residents: residents,
                falls_per_year: falls,
                falls_per_resident_rate: state.falls_per_resident_rate,
            }
        }
        InputField::FallsPerYear => {
            let falls = to_count(new_value);
            DerivedFields {
                number_of_residents: state.number_of_residents,
                falls_per_year: falls,
                falls_per_resident_rate: rate(falls, state.number_of_residents),
            }
        }
        _ => state,
    }
}

fn rate(falls: u32, residents: u32) -> f64 {
    guarded_ratio(
        "falls_per_resident_rate",
        f64::from(falls),
        f64::from(residents),
        OnZero::Zero,
    )
    .finite_or(0.0)
}

fn to_count(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let rounded = value.round();
    if rounded >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        rounded as u32
    }
}

/// Calculator form state: the current inputs plus the remembered rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorForm {
    inputs: CalculatorInputs,
    falls_per_resident_rate: f64,
}

impl CalculatorForm {
    /// A form showing `inputs`, with the rate derived from its counts.
    pub fn new(inputs: CalculatorInputs) -> Self {
        let derived = DerivedFields::from_inputs(&inputs);
        Self {
            inputs,
            falls_per_resident_rate: derived.falls_per_resident_rate,
        }
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    pub fn falls_per_resident_rate(&self) -> f64 {
        self.falls_per_resident_rate
    }

    /// The coupled triple as currently displayed.
    pub fn derived(&self) -> DerivedFields {
        DerivedFields {
            number_of_residents: self.inputs.number_of_residents(),
            falls_per_year: self.inputs.falls_per_year(),
            falls_per_resident_rate: self.falls_per_resident_rate,
        }
    }

    /// Apply one edit and return the next form state.
    ///
    /// Count edits never fail (they are clamped by the synchronizer). Other
    /// fields are validated and rejected with the field's name.
    pub fn apply(self, field: InputField, value: f64) -> Result<Self, ValidationError> {
        match field {
            InputField::NumberOfResidents | InputField::FallsPerYear => {
                let next = sync_derived_fields(self.derived(), field, value);
                tracing::trace!(
                    %field,
                    residents = next.number_of_residents,
                    falls = next.falls_per_year,
                    rate = next.falls_per_resident_rate,
                    "derived fields synchronized"
                );
                Ok(Self {
                    inputs: self
                        .inputs
                        .with_counts(next.number_of_residents, next.falls_per_year),
                    falls_per_resident_rate: next.falls_per_resident_rate,
                })
            }
            _ => Ok(Self {
                inputs: self.inputs.with_field(field, value)?,
                ..self
            }),
        }
    }

    /// Full recalculation from the current inputs.
    pub fn results(&self) -> CalculatorResults {
        compute_roi(&self.inputs)
    }
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self::new(CalculatorInputs::default())
    }
}
