// Rust guideline compliant 2026-02-06

//! Configuration management for Consolidate.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for the merge report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for Consolidate behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Accepted input file extensions, without leading dots.
    #[serde(default = "default_text_extensions")]
    pub text_extensions: Vec<String>,

    /// Default output format for the merge report.
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Default accepted extensions.
fn default_text_extensions() -> Vec<String> {
    vec!["txt".to_string(), "text".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_extensions: default_text_extensions(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/consolidate.toml`
    /// 3. Environment variables with `CONSOLIDATE_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory that may contain `consolidate.toml`
    ///
    /// # Returns
    ///
    /// A Config struct with file and environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file exists but cannot be read
    /// - The configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join("consolidate.toml");
        if config_path.exists() {
            Self::load_file(&config_path)
        } else {
            let mut config = Self::default();
            config.apply_env_overrides()?;
            config.validate()?;
            Ok(config)
        }
    }

    /// Loads configuration from a specific TOML file.
    ///
    /// Environment overrides and validation still apply.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::InvalidConfig(format!("Invalid config file: {}", e)))?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `CONSOLIDATE_TEXT_EXTENSIONS` - Comma-separated extension list
    /// - `CONSOLIDATE_OUTPUT_FORMAT` - Output format (json/table/plain)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("CONSOLIDATE_TEXT_EXTENSIONS") {
            self.text_extensions = val
                .split(',')
                .map(|ext| ext.trim().to_string())
                .filter(|ext| !ext.is_empty())
                .collect();
        }

        if let Ok(val) = std::env::var("CONSOLIDATE_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "CONSOLIDATE_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No extensions are configured
    /// - An extension is empty or carries a leading dot
    fn validate(&self) -> Result<()> {
        if self.text_extensions.is_empty() {
            return Err(crate::Error::InvalidConfig(
                "text_extensions must list at least one extension".to_string(),
            ));
        }

        for ext in &self.text_extensions {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(crate::Error::InvalidConfig(format!(
                    "text_extensions entries must be non-empty and written without a leading dot, got `{}`",
                    ext
                )));
            }
        }

        Ok(())
    }

    /// Saves the configuration to `<dir>/consolidate.toml`.
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory to write `consolidate.toml` into
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join("consolidate.toml");
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
