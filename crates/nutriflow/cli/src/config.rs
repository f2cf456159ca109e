//! CLI configuration
//!
//! Read from `<config dir>/nutriflow/config.toml` unless a path is given.
//! A missing file means defaults.

use crate::error::{CliError, CliResult};
use nutriflow_client::ClientConfig;
use nutriflow_store::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Backend connection
    pub client: ClientConfig,

    /// Session store settings
    pub store: StoreConfig,
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }

    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("nutriflow").join("config.toml"))
    }
}
