//! # Publications Subcommand
//!
//! `fallsense publications FILE` reads a publication list (the same JSON
//! array stored in the `publications` section) and prints its metrics and
//! the list newest first.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use fallsense_content::{sorted_by_recency, Publication, PublicationMetrics};
use serde_json::json;

use crate::config::load_document;

/// Arguments for `fallsense publications`.
#[derive(Args, Debug)]
pub struct PublicationsArgs {
    /// Publication list (JSON, or YAML with a .yaml/.yml extension).
    pub file: PathBuf,

    /// Print metrics and the sorted list as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the publications subcommand.
pub fn run_publications(args: &PublicationsArgs, out: &mut impl Write) -> Result<u8> {
    let publications: Vec<Publication> = load_document(&args.file)?;
    let metrics = PublicationMetrics::from_publications(&publications);
    let publications = sorted_by_recency(publications);

    if args.json {
        let doc = json!({ "metrics": metrics, "publications": publications });
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        return Ok(0);
    }

    writeln!(
        out,
        "Publications: {}  Citations: {}  h-index: {}",
        metrics.total_publications, metrics.total_citations, metrics.h_index
    )?;
    for p in &publications {
        writeln!(out)?;
        writeln!(out, "{}  {} ({} citations)", p.year, p.title, p.citations)?;
        let mut byline = p.authors.join(", ");
        if let Some(venue) = &p.venue {
            if !byline.is_empty() {
                byline.push_str(". ");
            }
            byline.push_str(venue);
        }
        if !byline.is_empty() {
            writeln!(out, "      {byline}")?;
        }
    }
    Ok(0)
}
