//! # Calculator Inputs
//!
//! A facility's operating parameters. Two representations exist:
//!
//! - [`RawInputs`]: plain `f64` fields as typed into a form, read from a
//!   JSON body, or overlaid from a config file. Missing fields take the
//!   built-in defaults.
//! - [`CalculatorInputs`]: the validated snapshot the calculator consumes.
//!   Converting `RawInputs` into it is the single validation boundary; every
//!   rejection names the camelCase field it came from.
//!
//! `CalculatorInputs` serializes through `RawInputs`, so deserializing it
//! from JSON or YAML validates as well.

use fallsense_core::{Fraction, Minutes, Money, ValidationError};
use serde::{Deserialize, Serialize};

/// Residents in the built-in default facility.
pub const DEFAULT_RESIDENTS: u32 = 100;
/// Falls per year in the built-in default facility.
pub const DEFAULT_FALLS_PER_YEAR: u32 = 50;

/// Identifies one input field of the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    /// Residents in the facility.
    NumberOfResidents,
    /// Fall incidents per year.
    FallsPerYear,
    /// Average direct cost of one fall.
    AvgCostPerFall,
    /// Hourly staff cost.
    StaffHourlyRate,
    /// Staff minutes saved per prevented incident.
    AvgMinutesSavedPerIncident,
    /// Annual liability insurance premium.
    InsurancePremiumPerYear,
    /// Annual legal liability cost.
    LegalLiabilityCostPerYear,
    /// Share of falls the system prevents.
    PercentFallsPrevented,
    /// One-time installation cost.
    InitialInstallationCost,
    /// Recurring annual subscription.
    AnnualSubscriptionCost,
}

impl InputField {
    /// The camelCase wire name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NumberOfResidents => "numberOfResidents",
            Self::FallsPerYear => "fallsPerYear",
            Self::AvgCostPerFall => "avgCostPerFall",
            Self::StaffHourlyRate => "staffHourlyRate",
            Self::AvgMinutesSavedPerIncident => "avgMinutesSavedPerIncident",
            Self::InsurancePremiumPerYear => "insurancePremiumPerYear",
            Self::LegalLiabilityCostPerYear => "legalLiabilityCostPerYear",
            Self::PercentFallsPrevented => "percentFallsPrevented",
            Self::InitialInstallationCost => "initialInstallationCost",
            Self::AnnualSubscriptionCost => "annualSubscriptionCost",
        }
    }

    /// All input fields, in form order.
    pub fn all() -> &'static [InputField] {
        &[
            Self::NumberOfResidents,
            Self::FallsPerYear,
            Self::AvgCostPerFall,
            Self::StaffHourlyRate,
            Self::AvgMinutesSavedPerIncident,
            Self::InsurancePremiumPerYear,
            Self::LegalLiabilityCostPerYear,
            Self::PercentFallsPrevented,
            Self::InitialInstallationCost,
            Self::AnnualSubscriptionCost,
        ]
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InputField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown input field: {s:?}"))
    }
}

/// Unvalidated calculator inputs, one `f64` per form field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RawInputs {
    pub number_of_residents: f64,
    pub falls_per_year: f64,
    pub avg_cost_per_fall: f64,
    pub staff_hourly_rate: f64,
    pub avg_minutes_saved_per_incident: f64,
    pub insurance_premium_per_year: f64,
    pub legal_liability_cost_per_year: f64,
    pub percent_falls_prevented: f64,
    pub initial_installation_cost: f64,
    pub annual_subscription_cost: f64,
}

impl RawInputs {
    /// Read one field.
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::NumberOfResidents => self.number_of_residents,
            InputField::FallsPerYear => self.falls_per_year,
            InputField::AvgCostPerFall => self.avg_cost_per_fall,
            InputField::StaffHourlyRate => self.staff_hourly_rate,
            InputField::AvgMinutesSavedPerIncident => self.avg_minutes_saved_per_incident,
            InputField::InsurancePremiumPerYear => self.insurance_premium_per_year,
            InputField::LegalLiabilityCostPerYear => self.legal_liability_cost_per_year,
            InputField::PercentFallsPrevented => self.percent_falls_prevented,
            InputField::InitialInstallationCost => self.initial_installation_cost,
            InputField::AnnualSubscriptionCost => self.annual_subscription_cost,
        }
    }

    /// Overwrite one field.
    pub fn set(&mut self, field: InputField, value: f64) {
        let slot = match field {
            InputField::NumberOfResidents => &mut self.number_of_residents,
            InputField::FallsPerYear => &mut self.falls_per_year,
            InputField::AvgCostPerFall => &mut self.avg_cost_per_fall,
            InputField::StaffHourlyRate => &mut self.staff_hourly_rate,
            InputField::AvgMinutesSavedPerIncident => &mut self.avg_minutes_saved_per_incident,
            InputField::InsurancePremiumPerYear => &mut self.insurance_premium_per_year,
            InputField::LegalLiabilityCostPerYear => &mut self.legal_liability_cost_per_year,
            InputField::PercentFallsPrevented => &mut self.percent_falls_prevented,
            InputField::InitialInstallationCost => &mut self.initial_installation_cost,
            InputField::AnnualSubscriptionCost => &mut self.annual_subscription_cost,
        };
        *slot = value;
    }

    /// Validate into a [`CalculatorInputs`] snapshot.
    pub fn validate(self) -> Result<CalculatorInputs, ValidationError> {
        CalculatorInputs::try_from(self)
    }
}

impl Default for RawInputs {
    fn default() -> Self {
        CalculatorInputs::default().into()
    }
}

/// Validated operating parameters of one facility.
///
/// Fields are private so the invariants (`numberOfResidents >= 1`, all
/// amounts finite and non-negative, prevention share in `[0, 1]`) cannot be
/// broken after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInputs", into = "RawInputs")]
pub struct CalculatorInputs {
    number_of_residents: u32,
    falls_per_year: u32,
    avg_cost_per_fall: Money,
    staff_hourly_rate: Money,
    avg_minutes_saved_per_incident: Minutes,
    insurance_premium_per_year: Money,
    legal_liability_cost_per_year: Money,
    percent_falls_prevented: Fraction,
    initial_installation_cost: Money,
    annual_subscription_cost: Money,
}

impl CalculatorInputs {
    pub fn number_of_residents(&self) -> u32 {
        self.number_of_residents
    }

    pub fn falls_per_year(&self) -> u32 {
        self.falls_per_year
    }

    pub fn avg_cost_per_fall(&self) -> Money {
        self.avg_cost_per_fall
    }

    pub fn staff_hourly_rate(&self) -> Money {
        self.staff_hourly_rate
    }

    pub fn avg_minutes_saved_per_incident(&self) -> Minutes {
        self.avg_minutes_saved_per_incident
    }

    pub fn insurance_premium_per_year(&self) -> Money {
        self.insurance_premium_per_year
    }

    pub fn legal_liability_cost_per_year(&self) -> Money {
        self.legal_liability_cost_per_year
    }

    pub fn percent_falls_prevented(&self) -> Fraction {
        self.percent_falls_prevented
    }

    pub fn initial_installation_cost(&self) -> Money {
        self.initial_installation_cost
    }

    pub fn annual_subscription_cost(&self) -> Money {
        self.annual_subscription_cost
    }

    /// Copy of these inputs with one field replaced, re-validated.
    pub fn with_field(self, field: InputField, value: f64) -> Result<Self, ValidationError> {
        let mut raw = RawInputs::from(self);
        raw.set(field, value);
        raw.validate()
    }

    /// Copy of these inputs with the two coupled counts replaced.
    ///
    /// Residents below one are raised to one.
    pub fn with_counts(self, number_of_residents: u32, falls_per_year: u32) -> Self {
        Self {
            number_of_residents: number_of_residents.max(1),
            falls_per_year,
            ..self
        }
    }
}

/// The reference facility: 100 residents, 50 falls a year, 40 % prevention.
impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            number_of_residents: DEFAULT_RESIDENTS,
            falls_per_year: DEFAULT_FALLS_PER_YEAR,
            avg_cost_per_fall: Money::from_whole(30_000),
            staff_hourly_rate: Money::from_whole(25),
            avg_minutes_saved_per_incident: Minutes::from_whole(15),
            insurance_premium_per_year: Money::from_whole(50_000),
            legal_liability_cost_per_year: Money::from_whole(25_000),
            percent_falls_prevented: Fraction::from_percent(40),
            initial_installation_cost: Money::from_whole(75_000),
            annual_subscription_cost: Money::from_whole(15_000),
        }
    }
}

impl TryFrom<RawInputs> for CalculatorInputs {
    type Error = ValidationError;

    fn try_from(raw: RawInputs) -> Result<Self, Self::Error> {
        let number_of_residents = whole_count(InputField::NumberOfResidents, raw.number_of_residents)?;
        if number_of_residents == 0 {
            return Err(ValidationError::ZeroCount {
                field: InputField::NumberOfResidents.as_str(),
            });
        }

        Ok(Self {
            number_of_residents,
            falls_per_year: whole_count(InputField::FallsPerYear, raw.falls_per_year)?,
            avg_cost_per_fall: money(InputField::AvgCostPerFall, raw.avg_cost_per_fall)?,
            staff_hourly_rate: money(InputField::StaffHourlyRate, raw.staff_hourly_rate)?,
            avg_minutes_saved_per_incident: Minutes::try_new(
                InputField::AvgMinutesSavedPerIncident.as_str(),
                raw.avg_minutes_saved_per_incident,
            )?,
            insurance_premium_per_year: money(
                InputField::InsurancePremiumPerYear,
                raw.insurance_premium_per_year,
            )?,
            legal_liability_cost_per_year: money(
                InputField::LegalLiabilityCostPerYear,
                raw.legal_liability_cost_per_year,
            )?,
            percent_falls_prevented: Fraction::try_new(
                InputField::PercentFallsPrevented.as_str(),
                raw.percent_falls_prevented,
            )?,
            initial_installation_cost: money(
                InputField::InitialInstallationCost,
                raw.initial_installation_cost,
            )?,
            annual_subscription_cost: money(
                InputField::AnnualSubscriptionCost,
                raw.annual_subscription_cost,
            )?,
        })
    }
}

impl From<CalculatorInputs> for RawInputs {
    fn from(inputs: CalculatorInputs) -> Self {
        Self {
            number_of_residents: f64::from(inputs.number_of_residents),
            falls_per_year: f64::from(inputs.falls_per_year),
            avg_cost_per_fall: inputs.avg_cost_per_fall.value(),
            staff_hourly_rate: inputs.staff_hourly_rate.value(),
            avg_minutes_saved_per_incident: inputs.avg_minutes_saved_per_incident.value(),
            insurance_premium_per_year: inputs.insurance_premium_per_year.value(),
            legal_liability_cost_per_year: inputs.legal_liability_cost_per_year.value(),
            percent_falls_prevented: inputs.percent_falls_prevented.value(),
            initial_installation_cost: inputs.initial_installation_cost.value(),
            annual_subscription_cost: inputs.annual_subscription_cost.value(),
        }
    }
}

fn money(field: InputField, value: f64) -> Result<Money, ValidationError> {
    Money::try_new(field.as_str(), value)
}

fn whole_count(field: InputField, value: f64) -> Result<u32, ValidationError> {
    let field = field.as_str();
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(ValidationError::NotWholeNumber { field, value });
    }
    Ok(value as u32)
}
