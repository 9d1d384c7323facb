//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. The calculator is stateless; the only shared data
//! is the section content store.

use std::path::PathBuf;
use std::sync::Arc;

use fallsense_content::{ContentStore, InMemoryContentStore};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Service configuration, read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to (`FALLSENSE_PORT`).
    pub port: u16,
    /// JSON file of initial sections (`FALLSENSE_SEED_CONTENT`).
    pub seed_content: Option<PathBuf>,
}

impl AppConfig {
    /// Build from an environment lookup. Unparseable ports fall back to the
    /// default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("FALLSENSE_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "FALLSENSE_PORT is not a port number, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let seed_content = lookup("FALLSENSE_SEED_CONTENT")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        Self { port, seed_content }
    }

    /// Build from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed_content: None,
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub content: Arc<dyn ContentStore>,
}

impl AppState {
    /// Default config with an empty in-memory store.
    pub fn new() -> Self {
        Self::with_store(AppConfig::default(), InMemoryContentStore::new())
    }

    /// Build state around a specific store.
    pub fn with_store(config: AppConfig, store: impl ContentStore + 'static) -> Self {
        Self {
            config,
            content: Arc::new(store),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("sections", &self.content.keys().len())
            .finish()
    }
}
