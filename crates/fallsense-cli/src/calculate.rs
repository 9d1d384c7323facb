//! # Calculate Subcommand
//!
//! `fallsense calculate` projects savings for one facility. Inputs are
//! layered, later layers winning:
//!
//! 1. built-in reference facility
//! 2. `defaults` from `--config`
//! 3. `--input FILE` (JSON or YAML, partial)
//! 4. individual flags
//!
//! The merged inputs are validated once, then computed.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use fallsense_roi::{compute_roi, CalculatorInputs, InputField, RawInputs, RoiReport};
use serde_json::{json, Map, Value};

use crate::config::{load_document, overlay, CliConfig};

/// Arguments for `fallsense calculate`.
#[derive(Args, Debug, Default)]
pub struct CalculateArgs {
    /// Number of residents in the facility.
    #[arg(long)]
    pub residents: Option<f64>,

    /// Falls recorded per year.
    #[arg(long)]
    pub falls: Option<f64>,

    /// Average direct cost of one fall.
    #[arg(long = "cost-per-fall")]
    pub cost_per_fall: Option<f64>,

    /// Staff hourly rate.
    #[arg(long = "staff-rate")]
    pub staff_rate: Option<f64>,

    /// Staff minutes saved per incident.
    #[arg(long = "minutes-saved")]
    pub minutes_saved: Option<f64>,

    /// Annual insurance premium.
    #[arg(long)]
    pub insurance: Option<f64>,

    /// Annual legal liability cost.
    #[arg(long)]
    pub legal: Option<f64>,

    /// Share of falls prevented, between 0 and 1.
    #[arg(long)]
    pub prevented: Option<f64>,

    /// One-time installation cost.
    #[arg(long)]
    pub installation: Option<f64>,

    /// Annual subscription cost.
    #[arg(long)]
    pub subscription: Option<f64>,

    /// Partial inputs file (JSON, or YAML with a .yaml/.yml extension).
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Print inputs and results as JSON instead of a report.
    #[arg(long)]
    pub json: bool,
}

impl CalculateArgs {
    fn flag_overrides(&self) -> impl Iterator<Item = (InputField, f64)> {
        [
            (InputField::NumberOfResidents, self.residents),
            (InputField::FallsPerYear, self.falls),
            (InputField::AvgCostPerFall, self.cost_per_fall),
            (InputField::StaffHourlyRate, self.staff_rate),
            (InputField::AvgMinutesSavedPerIncident, self.minutes_saved),
            (InputField::InsurancePremiumPerYear, self.insurance),
            (InputField::LegalLiabilityCostPerYear, self.legal),
            (InputField::PercentFallsPrevented, self.prevented),
            (InputField::InitialInstallationCost, self.installation),
            (InputField::AnnualSubscriptionCost, self.subscription),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

/// Merge every input layer and validate the result.
pub fn resolve_inputs(args: &CalculateArgs, config: &CliConfig) -> Result<CalculatorInputs> {
    let mut raw = overlay(RawInputs::default(), &config.defaults)?;

    if let Some(path) = &args.input {
        let partial: Map<String, Value> = load_document(path)?;
        raw = overlay(raw, &partial)
            .with_context(|| format!("invalid inputs in {}", path.display()))?;
    }

    for (field, value) in args.flag_overrides() {
        tracing::debug!(%field, value, "flag override");
        raw.set(field, value);
    }

    Ok(raw.validate()?)
}

/// Execute the calculate subcommand.
pub fn run_calculate(args: &CalculateArgs, config: &CliConfig, out: &mut impl Write) -> Result<u8> {
    let inputs = resolve_inputs(args, config)?;
    let results = compute_roi(&inputs);

    if args.json {
        let doc = json!({ "inputs": inputs, "results": results });
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
    } else {
        write!(out, "{}", RoiReport { inputs: &inputs, results: &results })?;
    }
    Ok(0)
}
