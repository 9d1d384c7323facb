//! # Startup Bootstrap
//!
//! Builds the [`AppState`] for the server. When `FALLSENSE_SEED_CONTENT`
//! names a file, it is read as a JSON object mapping section keys to content
//! and loaded into the store before the listener opens. Every key is
//! validated and typed sections are checked, so a bad seed stops startup
//! rather than surfacing later as a 500.

use std::path::Path;

use fallsense_content::{normalize_section, ContentError, InMemoryContentStore};
use fallsense_core::{SectionKey, ValidationError};
use serde_json::{Map, Value};

use crate::state::{AppConfig, AppState};

/// Errors during bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// Seed file does not exist.
    #[error("seed content file not found: {path}")]
    SeedNotFound { path: String },

    /// Seed file is not a JSON object.
    #[error("seed content in {path} is not a JSON object: {reason}")]
    InvalidSeed { path: String, reason: String },

    /// A seed key is not a valid section key.
    #[error(transparent)]
    InvalidKey(#[from] ValidationError),

    /// A typed section in the seed has the wrong shape.
    #[error(transparent)]
    InvalidSection(#[from] ContentError),

    /// IO error reading the seed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build application state from `config`, loading seed content if configured.
pub fn bootstrap(config: AppConfig) -> Result<AppState, BootstrapError> {
    let store = match &config.seed_content {
        Some(path) => {
            let store = load_seed(path)?;
            tracing::info!(path = %path.display(), sections = store.len(), "seed content loaded");
            store
        }
        None => {
            tracing::info!("no seed content configured, starting with an empty store");
            InMemoryContentStore::new()
        }
    };
    Ok(AppState::with_store(config, store))
}

/// Read a seed file into a fresh store.
pub fn load_seed(path: &Path) -> Result<InMemoryContentStore, BootstrapError> {
    if !path.exists() {
        return Err(BootstrapError::SeedNotFound {
            path: path.display().to_string(),
        });
    }
    let raw = std::fs::read_to_string(path)?;
    let sections: Map<String, Value> =
        serde_json::from_str(&raw).map_err(|e| BootstrapError::InvalidSeed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    let mut parsed = Vec::with_capacity(sections.len());
    for (key, content) in sections {
        let key = SectionKey::new(key)?;
        let content = normalize_section(&key, content)?;
        parsed.push((key, content));
    }
    Ok(InMemoryContentStore::seeded(parsed))
}
