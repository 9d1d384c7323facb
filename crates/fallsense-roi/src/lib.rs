//! # fallsense-roi: Fall-Prevention ROI Calculator
//!
//! Projects what a facility saves by preventing falls, and how quickly the
//! sensing system pays for itself.
//!
//! ## Modules
//!
//! - [`inputs`]: `RawInputs` (as typed) and validated `CalculatorInputs`.
//! - [`calculator`]: `compute_roi`, a total, deterministic projection.
//! - [`sync`]: keeps residents, falls per year and the per-resident rate
//!   consistent across form edits.
//! - [`report`]: text rendering for terminals.
//!
//! ## Determinism
//!
//! `compute_roi` performs no I/O and reads no ambient state. Identical inputs
//! always produce identical results, and a recalculation is always a full
//! re-derivation from the current inputs snapshot.

pub mod calculator;
pub mod inputs;
pub mod report;
pub mod sync;

pub use calculator::{compute_roi, try_compute_roi, CalculatorResults};
pub use inputs::{CalculatorInputs, InputField, RawInputs};
pub use report::RoiReport;
pub use sync::{sync_derived_fields, CalculatorForm, DerivedFields};
