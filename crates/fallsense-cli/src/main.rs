//! # fallsense CLI entry point
//!
//! Parses command-line arguments, loads `--config` and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fallsense_cli::calculate::{run_calculate, CalculateArgs};
use fallsense_cli::config::load_config;
use fallsense_cli::publications::{run_publications, PublicationsArgs};
use fallsense_cli::sync::{run_sync, SyncArgs};

/// Fallsense: fall-prevention ROI projections from the terminal.
#[derive(Parser, Debug)]
#[command(name = "fallsense", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Project savings, payback period and three-year ROI.
    Calculate(CalculateArgs),

    /// Apply one edit to the residents / falls / rate triple.
    Sync(SyncArgs),

    /// Summarize a publication list.
    Publications(PublicationsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut out = std::io::stdout().lock();
    let result = load_config(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Calculate(args) => run_calculate(args, &config, &mut out),
        Commands::Sync(args) => run_sync(args, &mut out),
        Commands::Publications(args) => run_publications(args, &mut out),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_calculate_flags() {
        let cli = Cli::try_parse_from([
            "fallsense",
            "-vv",
            "calculate",
            "--residents",
            "80",
            "--cost-per-fall",
            "28000",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Calculate(args) = cli.command else {
            panic!("expected calculate");
        };
        assert_eq!(args.residents, Some(80.0));
        assert_eq!(args.cost_per_fall, Some(28_000.0));
        assert!(args.json);
    }

    #[test]
    fn global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["fallsense", "calculate", "--config", "f.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("f.yaml")));
    }

    #[test]
    fn sync_requires_one_edit() {
        assert!(Cli::try_parse_from(["fallsense", "sync", "--residents", "10", "--falls", "5"]).is_err());
        assert!(Cli::try_parse_from([
            "fallsense",
            "sync",
            "--residents",
            "10",
            "--falls",
            "5",
            "--set-residents",
            "20",
            "--set-falls",
            "8",
        ])
        .is_err());
        assert!(Cli::try_parse_from([
            "fallsense",
            "sync",
            "--residents",
            "10",
            "--falls",
            "5",
            "--set-falls",
            "8",
        ])
        .is_ok());
    }

    #[test]
    fn publications_takes_file() {
        let cli = Cli::try_parse_from(["fallsense", "publications", "pubs.json"]).unwrap();
        let Commands::Publications(args) = cli.command else {
            panic!("expected publications");
        };
        assert_eq!(args.file, PathBuf::from("pubs.json"));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
