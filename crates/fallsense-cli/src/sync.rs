//! # Sync Subcommand
//!
//! `fallsense sync` applies one edit to the residents / falls-per-year /
//! falls-per-resident triple and prints the result, the same way the
//! calculator form does.

use std::io::Write;

use anyhow::{bail, Result};
use clap::{ArgGroup, Args};
use fallsense_roi::{sync_derived_fields, DerivedFields, InputField};

/// Arguments for `fallsense sync`.
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("edit")
        .required(true)
        .args(["set_residents", "set_falls"]),
))]
pub struct SyncArgs {
    /// Current number of residents.
    #[arg(long)]
    pub residents: u32,

    /// Current falls per year.
    #[arg(long)]
    pub falls: u32,

    /// Remembered falls-per-resident rate. Defaults to falls / residents.
    #[arg(long)]
    pub rate: Option<f64>,

    /// New resident count; falls are rescaled at the remembered rate.
    #[arg(long = "set-residents")]
    pub set_residents: Option<f64>,

    /// New falls per year; the rate is recomputed.
    #[arg(long = "set-falls")]
    pub set_falls: Option<f64>,

    /// Print the triple as JSON.
    #[arg(long)]
    pub json: bool,
}

impl SyncArgs {
    fn edit(&self) -> Result<(InputField, f64)> {
        match (self.set_residents, self.set_falls) {
            (Some(v), None) => Ok((InputField::NumberOfResidents, v)),
            (None, Some(v)) => Ok((InputField::FallsPerYear, v)),
            _ => bail!("exactly one of --set-residents or --set-falls is required"),
        }
    }

    fn state(&self) -> Result<DerivedFields> {
        if self.residents == 0 {
            bail!("--residents must be at least 1");
        }
        let mut state = DerivedFields::new(self.residents, self.falls);
        if let Some(rate) = self.rate {
            if !rate.is_finite() || rate < 0.0 {
                bail!("--rate must be a non-negative number, got {rate}");
            }
            state.falls_per_resident_rate = rate;
        }
        Ok(state)
    }
}

/// Execute the sync subcommand.
pub fn run_sync(args: &SyncArgs, out: &mut impl Write) -> Result<u8> {
    let (field, value) = args.edit()?;
    let next = sync_derived_fields(args.state()?, field, value);

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&next)?)?;
    } else {
        writeln!(out, "{:<22}{}", "Residents", next.number_of_residents)?;
        writeln!(out, "{:<22}{}", "Falls per year", next.falls_per_year)?;
        writeln!(out, "{:<22}{:.4}", "Falls per resident", next.falls_per_resident_rate)?;
    }
    Ok(0)
}
