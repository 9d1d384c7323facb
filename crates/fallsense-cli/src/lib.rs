//! # fallsense-cli: Command-Line Front End
//!
//! Provides the `fallsense` binary for running projections outside the
//! website, e.g. when preparing a proposal for a specific facility.
//!
//! ## Subcommands
//!
//! - `fallsense calculate`: savings, payback and three-year ROI, as a text
//!   report or JSON.
//! - `fallsense sync`: one edit to the residents/falls/rate triple.
//! - `fallsense publications FILE`: publication metrics and list.
//!
//! ```bash
//! fallsense calculate --residents 80 --falls 30
//! fallsense --config facility.yaml calculate --input overrides.json --json
//! fallsense sync --residents 100 --falls 50 --set-residents 200
//! ```
//!
//! Each `run_*` handler writes to the given sink and returns the process
//! exit code.

pub mod calculate;
pub mod config;
pub mod publications;
pub mod sync;
