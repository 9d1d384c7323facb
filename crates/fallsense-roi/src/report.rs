//! # Text Report
//!
//! Human-readable rendering of a [`CalculatorResults`] snapshot, used by the
//! CLI. Currency is rounded to whole dollars with thousands separators.

use std::fmt;

use fallsense_core::Bounded;

use crate::calculator::CalculatorResults;
use crate::inputs::CalculatorInputs;

/// Format a currency amount as `$1,234` / `-$1,234`.
///
/// Validated inputs never yield a non-finite amount; one is shown as `n/a`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}${}", group_thousands(&digits))
}

/// Format a payback period: `0.12 years`, or `never` when unbounded.
pub fn format_years(years: Bounded) -> String {
    match years {
        Bounded::Finite(v) => format!("{v:.2} years"),
        Bounded::Unbounded => "never".to_string(),
    }
}

/// Format a percentage to one decimal, or `unbounded`.
pub fn format_percent(percent: Bounded) -> String {
    match percent {
        Bounded::Finite(v) => format!("{v:.1}%"),
        Bounded::Unbounded => "unbounded".to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Inputs and results rendered together.
pub struct RoiReport<'a> {
    pub inputs: &'a CalculatorInputs,
    pub results: &'a CalculatorResults,
}

impl fmt::Display for RoiReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i = self.inputs;
        let r = self.results;

        writeln!(f, "Facility")?;
        row(f, "Residents", i.number_of_residents().to_string())?;
        row(f, "Falls per year", i.falls_per_year().to_string())?;
        row(f, "Falls per resident", format!("{:.2}", r.falls_per_resident))?;
        row(f, "Falls prevented", format!("{} of falls", i.percent_falls_prevented()))?;
        row(f, "Installation", format_currency(i.initial_installation_cost().value()))?;
        row(f, "Annual subscription", format_currency(i.annual_subscription_cost().value()))?;
        writeln!(f)?;

        writeln!(f, "Annual savings")?;
        row(f, "Falls prevented per year", format!("{:.1}", r.falls_prevented))?;
        row(f, "Direct medical", format_currency(r.direct_medical_savings))?;
        row(f, "Staff efficiency", format_currency(r.staff_efficiency_gains))?;
        row(f, "Insurance", format_currency(r.insurance_savings))?;
        row(f, "Legal liability", format_currency(r.legal_savings))?;
        row(f, "Total", format_currency(r.total_annual_savings))?;
        writeln!(f)?;

        writeln!(f, "Return")?;
        row(f, "Payback period", format_years(r.payback_period_years))?;
        row(f, "Three-year ROI", format_percent(r.three_year_roi))?;
        let [c1, c2, c3] = r.cumulative_net();
        row(f, "Year 1 net", format!("{} (cumulative {})", format_currency(r.year1_savings), format_currency(c1)))?;
        row(f, "Year 2 net", format!("{} (cumulative {})", format_currency(r.year2_savings), format_currency(c2)))?;
        row(f, "Year 3 net", format!("{} (cumulative {})", format_currency(r.year3_savings), format_currency(c3)))
    }
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: String) -> fmt::Result {
    writeln!(f, "  {label:<26}{value}")
}
