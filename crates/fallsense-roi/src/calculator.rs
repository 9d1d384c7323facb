//! # ROI Calculation
//!
//! Derives projected savings and return-on-investment from a validated
//! [`CalculatorInputs`] snapshot.
//!
//! ## Formula pipeline
//!
//! ```text
//! falls_per_resident     = falls / residents
//! falls_prevented        = falls * prevented_share
//! direct_medical         = falls_prevented * cost_per_fall
//! staff_hours            = (minutes_saved / 60) * falls_prevented
//! staff_efficiency       = staff_hours * hourly_rate
//! insurance              = premium * (falls_prevented / falls) * 0.05
//! legal                  = legal_cost * (falls_prevented / falls)
//! total                  = direct_medical + staff_efficiency + insurance + legal
//! payback_years          = installation / total
//! three_year_cost        = installation + subscription * 3
//! three_year_roi         = (total * 3 - three_year_cost) / three_year_cost * 100
//! year1                  = total - installation - subscription
//! year2 = year3          = total - subscription
//! ```
//!
//! Every division goes through [`guarded_ratio`]; see `fallsense_core::ratio`
//! for the zero-denominator policies. The function is total: any validated
//! input produces finite numbers or an explicit [`Bounded::Unbounded`].
//! Finiteness relies on the validated caps: counts fit in `u32` and amounts
//! are at most [`fallsense_core::MAX_AMOUNT`].

use fallsense_core::{guarded_ratio, Bounded, OnZero, ValidationError};
use serde::{Deserialize, Serialize};

use crate::inputs::{CalculatorInputs, RawInputs};

/// Share of the insurance premium saved in proportion to falls prevented.
pub const INSURANCE_REDUCTION_FACTOR: f64 = 0.05;

/// Length of the ROI horizon in years.
pub const PROJECTION_YEARS: f64 = 3.0;

/// Projected savings for one input snapshot.
///
/// A value type: recalculating produces a new snapshot rather than updating
/// this one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResults {
    pub falls_per_resident: f64,
    pub falls_prevented: f64,
    pub direct_medical_savings: f64,
    pub staff_efficiency_gains: f64,
    pub insurance_savings: f64,
    pub legal_savings: f64,
    pub total_annual_savings: f64,
    /// Years until savings repay the installation; unbounded with no savings.
    pub payback_period_years: Bounded,
    /// Net three-year return as a percentage of three-year cost.
    #[serde(rename = "threeYearROI")]
    pub three_year_roi: Bounded,
    pub year1_savings: f64,
    pub year2_savings: f64,
    /// Always equal to `year2_savings`; the projection models no growth.
    pub year3_savings: f64,
}

impl CalculatorResults {
    /// Running net savings at the end of years one, two and three.
    pub fn cumulative_net(&self) -> [f64; 3] {
        let y1 = self.year1_savings;
        let y2 = y1 + self.year2_savings;
        [y1, y2, y2 + self.year3_savings]
    }
}

/// Compute the ROI projection for `inputs`.
pub fn compute_roi(inputs: &CalculatorInputs) -> CalculatorResults {
    let falls = f64::from(inputs.falls_per_year());
    let residents = f64::from(inputs.number_of_residents());
    let installation = inputs.initial_installation_cost().value();
    let subscription = inputs.annual_subscription_cost().value();

    let falls_per_resident =
        guarded_ratio("falls_per_resident", falls, residents, OnZero::Zero).finite_or(0.0);
    let falls_prevented = falls * inputs.percent_falls_prevented().value();

    let direct_medical_savings = falls_prevented * inputs.avg_cost_per_fall().value();

    let staff_time_saved_hours = inputs.avg_minutes_saved_per_incident().as_hours() * falls_prevented;
    let staff_efficiency_gains = staff_time_saved_hours * inputs.staff_hourly_rate().value();

    // No falls means nothing to prevent: insurance and legal savings are zero.
    let prevention_share =
        guarded_ratio("prevention_share", falls_prevented, falls, OnZero::Zero).finite_or(0.0);
    let insurance_savings =
        inputs.insurance_premium_per_year().value() * prevention_share * INSURANCE_REDUCTION_FACTOR;
    let legal_savings = inputs.legal_liability_cost_per_year().value() * prevention_share;

    let total_annual_savings =
        direct_medical_savings + staff_efficiency_gains + insurance_savings + legal_savings;

    let payback_period_years = guarded_ratio(
        "payback_period_years",
        installation,
        total_annual_savings,
        OnZero::Unbounded,
    );

    let three_year_cost = installation + subscription * PROJECTION_YEARS;
    let three_year_gain = total_annual_savings * PROJECTION_YEARS - three_year_cost;
    let three_year_roi = match guarded_ratio(
        "three_year_roi",
        three_year_gain,
        three_year_cost,
        OnZero::UnboundedIfPositive,
    ) {
        Bounded::Finite(ratio) => Bounded::Finite(ratio * 100.0),
        Bounded::Unbounded => Bounded::Unbounded,
    };

    let recurring_year_savings = total_annual_savings - subscription;

    CalculatorResults {
        falls_per_resident,
        falls_prevented,
        direct_medical_savings,
        staff_efficiency_gains,
        insurance_savings,
        legal_savings,
        total_annual_savings,
        payback_period_years,
        three_year_roi,
        year1_savings: recurring_year_savings - installation,
        year2_savings: recurring_year_savings,
        year3_savings: recurring_year_savings,
    }
}

/// Validate `raw` and compute its projection.
pub fn try_compute_roi(raw: RawInputs) -> Result<CalculatorResults, ValidationError> {
    let inputs = raw.validate()?;
    Ok(compute_roi(&inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fallsense_core::MAX_AMOUNT;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9 * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    fn zeroed() -> RawInputs {
        RawInputs {
            number_of_residents: 10.0,
            falls_per_year: 0.0,
            avg_cost_per_fall: 0.0,
            staff_hourly_rate: 0.0,
            avg_minutes_saved_per_incident: 0.0,
            insurance_premium_per_year: 0.0,
            legal_liability_cost_per_year: 0.0,
            percent_falls_prevented: 0.0,
            initial_installation_cost: 0.0,
            annual_subscription_cost: 0.0,
        }
    }

    #[test]
    fn reference_facility() {
        let r = compute_roi(&CalculatorInputs::default());
        assert_close(r.falls_per_resident, 0.5);
        assert_close(r.falls_prevented, 20.0);
        assert_close(r.direct_medical_savings, 600_000.0);
        assert_close(r.staff_efficiency_gains, 125.0);
        assert_close(r.insurance_savings, 1_000.0);
        assert_close(r.legal_savings, 10_000.0);
        assert_close(r.total_annual_savings, 611_125.0);
        assert_close(r.payback_period_years.finite().unwrap(), 75_000.0 / 611_125.0);
        assert!((r.payback_period_years.finite().unwrap() - 0.1227).abs() < 1e-4);
        assert_close(r.three_year_roi.finite().unwrap(), 1_427.8125);
        assert_close(r.year1_savings, 521_125.0);
        assert_close(r.year2_savings, 596_125.0);
        assert_close(r.year3_savings, 596_125.0);
    }

    #[test]
    fn zero_falls_guards_insurance_and_legal() {
        let raw = RawInputs {
            falls_per_year: 0.0,
            ..RawInputs::default()
        };
        let r = try_compute_roi(raw).unwrap();
        assert_eq!(r.insurance_savings, 0.0);
        assert_eq!(r.legal_savings, 0.0);
        assert_eq!(r.falls_per_resident, 0.0);
        assert_eq!(r.total_annual_savings, 0.0);
        assert_eq!(r.payback_period_years, Bounded::Unbounded);
    }

    #[test]
    fn zero_everything_is_unbounded_payback_not_nan() {
        let r = try_compute_roi(zeroed()).unwrap();
        assert_eq!(r.total_annual_savings, 0.0);
        assert_eq!(r.payback_period_years, Bounded::Unbounded);
        assert_eq!(r.three_year_roi, Bounded::Finite(0.0));
        assert_eq!(r.year1_savings, 0.0);
    }

    #[test]
    fn free_system_with_savings_has_unbounded_roi() {
        let raw = RawInputs {
            initial_installation_cost: 0.0,
            annual_subscription_cost: 0.0,
            ..RawInputs::default()
        };
        let r = try_compute_roi(raw).unwrap();
        assert_eq!(r.payback_period_years, Bounded::Finite(0.0));
        assert_eq!(r.three_year_roi, Bounded::Unbounded);
    }

    #[test]
    fn savings_below_subscription_gives_negative_roi() {
        let raw = RawInputs {
            falls_per_year: 2.0,
            avg_cost_per_fall: 1_000.0,
            ..RawInputs::default()
        };
        let r = try_compute_roi(raw).unwrap();
        assert!(r.year2_savings < 0.0);
        assert!(r.three_year_roi.finite().unwrap() < 0.0);
    }

    #[test]
    fn invalid_raw_input_is_rejected() {
        let raw = RawInputs {
            percent_falls_prevented: 1.2,
            ..RawInputs::default()
        };
        assert!(try_compute_roi(raw).is_err());
    }

    fn at_limits() -> RawInputs {
        RawInputs {
            number_of_residents: f64::from(u32::MAX),
            falls_per_year: f64::from(u32::MAX),
            avg_cost_per_fall: MAX_AMOUNT,
            staff_hourly_rate: MAX_AMOUNT,
            avg_minutes_saved_per_incident: MAX_AMOUNT,
            insurance_premium_per_year: MAX_AMOUNT,
            legal_liability_cost_per_year: MAX_AMOUNT,
            percent_falls_prevented: 1.0,
            initial_installation_cost: MAX_AMOUNT,
            annual_subscription_cost: MAX_AMOUNT,
        }
    }

    fn assert_all_finite(r: &CalculatorResults) {
        for v in [
            r.falls_per_resident,
            r.falls_prevented,
            r.direct_medical_savings,
            r.staff_efficiency_gains,
            r.insurance_savings,
            r.legal_savings,
            r.total_annual_savings,
            r.year1_savings,
            r.year2_savings,
            r.year3_savings,
        ] {
            assert!(v.is_finite(), "{r:?}");
        }
    }

    #[test]
    fn largest_valid_inputs_stay_finite() {
        let r = try_compute_roi(at_limits()).unwrap();
        assert_all_finite(&r);
        assert!(r.payback_period_years.finite().is_some());
        assert!(r.three_year_roi.finite().unwrap() > 0.0);

        let json = serde_json::to_value(r).unwrap();
        assert!(json["totalAnnualSavings"].is_number());
        assert!(json["year1Savings"].is_number());
    }

    #[test]
    fn huge_costs_with_no_savings_are_a_loss_not_unbounded() {
        let raw = RawInputs {
            percent_falls_prevented: 0.0,
            ..at_limits()
        };
        let r = try_compute_roi(raw).unwrap();
        assert_all_finite(&r);
        assert_eq!(r.payback_period_years, Bounded::Unbounded);
        assert_close(r.three_year_roi.finite().unwrap(), -100.0);
        assert_close(r.year1_savings, -2.0 * MAX_AMOUNT);
    }

    #[test]
    fn amounts_past_the_cap_are_rejected() {
        let raw = RawInputs {
            avg_cost_per_fall: 1e307,
            ..RawInputs::default()
        };
        let err = try_compute_roi(raw).unwrap_err();
        assert_eq!(err.field(), Some("avgCostPerFall"));

        let raw = RawInputs {
            initial_installation_cost: 1e308,
            annual_subscription_cost: 1e308,
            ..RawInputs::default()
        };
        assert!(matches!(
            try_compute_roi(raw),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn cumulative_net_matches_roi_numerator() {
        let r = compute_roi(&CalculatorInputs::default());
        let [y1, y2, y3] = r.cumulative_net();
        assert_close(y1, 521_125.0);
        assert_close(y2, 1_117_250.0);
        assert_close(y3, 611_125.0 * 3.0 - 120_000.0);
    }

    #[test]
    fn results_serialize_with_original_field_names() {
        let value = serde_json::to_value(compute_roi(&CalculatorInputs::default())).unwrap();
        for key in [
            "fallsPerResident",
            "fallsPrevented",
            "directMedicalSavings",
            "staffEfficiencyGains",
            "insuranceSavings",
            "legalSavings",
            "totalAnnualSavings",
            "paybackPeriodYears",
            "threeYearROI",
            "year1Savings",
            "year2Savings",
            "year3Savings",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["paybackPeriodYears"]["kind"], "finite");
    }
}
