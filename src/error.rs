use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a probe configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON config: {reason}")]
    InvalidJson { reason: String },

    #[error("Invalid YAML config: {reason}")]
    InvalidYaml { reason: String },
}

/// Errors raised while rendering resolved facts
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
