use std::path::PathBuf;

use agora_core::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported config format '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
    #[error("Invalid market configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to write report: {0}")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
