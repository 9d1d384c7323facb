//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`:
//!
//! ```yaml
//! defaults:
//!   numberOfResidents: 80
//!   avgCostPerFall: 28000
//! ```
//!
//! `defaults` is a partial calculator input object layered between the
//! built-in reference facility and any `--input` file. Unknown keys are
//! rejected at load time.

use std::path::Path;

use anyhow::{Context, Result};
use fallsense_roi::RawInputs;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Parsed `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Partial calculator inputs.
    #[serde(default)]
    pub defaults: Map<String, Value>,
}

impl CliConfig {
    /// Load and check a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = load_document(path)?;
        overlay(RawInputs::default(), &config.defaults)
            .with_context(|| format!("invalid defaults in {}", path.display()))?;
        tracing::debug!(path = %path.display(), keys = config.defaults.len(), "config loaded");
        Ok(config)
    }
}

/// Load `--config` if given, otherwise an empty config.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    match path {
        Some(p) => CliConfig::load(p),
        None => Ok(CliConfig::default()),
    }
}

/// Read a JSON or YAML document, chosen by extension (`.yaml`/`.yml` are
/// YAML, anything else JSON).
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
    if is_yaml {
        serde_yaml::from_str(&raw).with_context(|| format!("failed to parse YAML {}", path.display()))
    } else {
        serde_json::from_str(&raw).with_context(|| format!("failed to parse JSON {}", path.display()))
    }
}

/// Overlay the keys of `partial` on `base`. Unknown keys and non-numeric
/// values are errors; range checks happen later, at validation.
pub fn overlay(base: RawInputs, partial: &Map<String, Value>) -> Result<RawInputs> {
    let mut merged = match serde_json::to_value(base)? {
        Value::Object(map) => map,
        other => anyhow::bail!("calculator inputs serialized as {other}, expected an object"),
    };
    for (key, value) in partial {
        merged.insert(key.clone(), value.clone());
    }
    Ok(serde_json::from_value(Value::Object(merged))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn no_path_is_empty_config() {
        assert_eq!(load_config(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn loads_yaml_defaults() {
        let file = write_temp(".yaml", "defaults:\n  numberOfResidents: 80\n  avgCostPerFall: 28000\n");
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.defaults.len(), 2);
        let raw = overlay(RawInputs::default(), &config.defaults).unwrap();
        assert_eq!(raw.number_of_residents, 80.0);
        assert_eq!(raw.avg_cost_per_fall, 28_000.0);
        assert_eq!(raw.falls_per_year, 50.0);
    }

    #[test]
    fn empty_yaml_mapping_is_fine() {
        let file = write_temp(".yml", "defaults: {}\n");
        assert!(load_config(Some(file.path())).unwrap().defaults.is_empty());
    }

    #[test]
    fn unknown_top_level_key_rejected() {
        let file = write_temp(".yaml", "default:\n  numberOfResidents: 80\n");
        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn unknown_input_key_rejected() {
        let file = write_temp(".yaml", "defaults:\n  residents: 80\n");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("residents"), "{err:#}");
    }

    #[test]
    fn missing_file_is_error() {
        assert!(load_config(Some(Path::new("/nonexistent/fallsense.yaml"))).is_err());
    }

    #[test]
    fn json_document_by_default() {
        let file = write_temp(".json", r#"{"fallsPerYear": 12}"#);
        let partial: Map<String, Value> = load_document(file.path()).unwrap();
        assert_eq!(partial["fallsPerYear"], 12);
    }
}
