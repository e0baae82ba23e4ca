//! Probe configuration

use crate::error::ConfigError;
use crate::facts::SAMBA_VERSION_FACT;
use crate::probe::{DEFAULT_PACKAGE, DEFAULT_VERSION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.yaml` and `.yml` files are YAML, everything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Package whose version is looked up
    pub package: String,
    /// Name the version is published under
    pub fact_name: String,
    /// Reported when the operating system matches no lookup rule
    pub default_version: String,
    /// Fixed operating system identifier, skipping host detection
    pub os: Option<String>,
    /// Alternate os-release file for host detection
    pub os_release_path: Option<PathBuf>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            fact_name: SAMBA_VERSION_FACT.to_string(),
            default_version: DEFAULT_VERSION.to_string(),
            os: None,
            os_release_path: None,
        }
    }
}

impl ProbeConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, ConfigFormat::from_path(path))
    }

    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| ConfigError::InvalidJson {
                    reason: e.to_string(),
                })
            }
            ConfigFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| ConfigError::InvalidYaml {
                    reason: e.to_string(),
                })
            }
        }
    }
}
