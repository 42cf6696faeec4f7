use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::driver::{sample_packages, OutputFormat, Package};
use crate::logging::LogConfig;

/// Main application configuration
///
/// ```toml
/// output = "text"
///
/// [logging]
/// level = "info"
/// format = "compact"
///
/// [[packages]]
/// code = "RUN"
/// data = [15000, 1, 75]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Summary output format
    pub output: OutputFormat,

    /// Logging settings
    pub logging: LogConfig,

    /// Sensor packages to process; empty means the built-in sample
    pub packages: Vec<Package>,
}

/// Configuration management implementation
impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Save configuration to TOML file
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

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fittrack")
            .join("config.toml")
    }

    /// Load the default configuration file, falling back to defaults when
    /// it is absent or unreadable
    pub fn load_or_default() -> Self {
        let config_path = Self::default_config_path();
        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&config_path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %err,
                    "Ignoring unreadable config file, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Packages to run: the configured list, or the sample when none are set
    pub fn packages_or_sample(&self) -> Vec<Package> {
        if self.packages.is_empty() {
            sample_packages()
        } else {
            self.packages.clone()
        }
    }
}
