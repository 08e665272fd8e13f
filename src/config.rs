use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::logging::LogConfig;
use crate::trend::SmoothingConfig;

/// Top-level configuration, supplied at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Smoothing constants and zone thresholds
    pub smoothing: SmoothingConfig,

    /// Logging setup
    pub log: LogConfig,
}

impl TrendConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: TrendConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fittrend")
            .join("config.toml")
    }

    /// Load from the default location, falling back to defaults
    pub fn load_or_default() -> Self {
        let config_path = Self::default_config_path();

        match Self::load_from_file(&config_path) {
            Ok(config) => config,
            Err(_) => {
                debug!(path = %config_path.display(), "config file not found, using defaults");
                Self::default()
            }
        }
    }

    /// Validate the loaded values before handing them to a calculator
    pub fn validate(&self) -> crate::error::Result<()> {
        self.smoothing.validate()
    }
}
