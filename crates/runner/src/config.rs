//! Configuration loading
//!
//! The input document is YAML by default; `.json` files are read as JSON.

use std::path::Path;

use abm::MarketConfig;

use crate::error::{Result, RunnerError};

/// Input file used when none is given on the command line
pub const DEFAULT_CONFIG: &str = "input.yaml";

/// Load a market configuration, picking the format from the extension
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<MarketConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| RunnerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "yaml" | "yml" => from_yaml_str(&content),
        "json" => from_json_str(&content),
        other => Err(RunnerError::UnsupportedFormat(other.to_string())),
    }
}

/// An empty document yields the default configuration
pub fn from_yaml_str(yaml: &str) -> Result<MarketConfig> {
    if yaml.trim().is_empty() {
        return Ok(MarketConfig::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

pub fn from_json_str(json: &str) -> Result<MarketConfig> {
    Ok(serde_json::from_str(json)?)
}
