//! Configuration module
//!
//! A single TOML file configures both the engine (`[splitting]`,
//! `[abbreviations]`, `[standalone]`) and the CLI output (`[output]`).

use crate::error::CliError;
use anyhow::{Context, Result};
use bubblesplit_core::SplitterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI-only configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Engine and CLI settings loaded together
#[derive(Debug, Default)]
pub struct LoadedConfig {
    /// Engine configuration
    pub splitter: SplitterConfig,
    /// CLI configuration
    pub cli: CliConfig,
}

impl LoadedConfig {
    /// Load from `path`, or fall back to the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            log::debug!("No configuration file given, using defaults");
            return Ok(Self::default());
        };

        log::info!("Loading configuration from {}", path.display());
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let splitter = SplitterConfig::from_toml_str(&source)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        let cli: CliConfig = toml::from_str(&source)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        Ok(Self { splitter, cli })
    }
}
