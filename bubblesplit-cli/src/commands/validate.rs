//! Validate command implementation

use crate::commands::split::OutputFormat;
use crate::config::LoadedConfig;
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match check(&self.config) {
            Ok(summary) => {
                println!("✓ Configuration is valid!");
                print!("{summary}");
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

/// Load the file and describe what it configures
fn check(path: &std::path::Path) -> Result<String> {
    let loaded = LoadedConfig::load(Some(path))?;
    let format = &loaded.cli.output.default_format;
    if OutputFormat::from_str(format, true).is_err() {
        anyhow::bail!("unknown output format '{format}'");
    }

    let splitter = &loaded.splitter;
    let abbreviation_count: usize = splitter.abbreviations.values().map(Vec::len).sum();
    Ok(format!(
        "  max_chars: {}\n  oversize threshold: {}\n  abbreviations: {}\n  canned phrases: {}\n  default format: {}\n",
        splitter.max_chars(),
        splitter.oversize_threshold(),
        abbreviation_count,
        splitter.effective_phrases().len(),
        format,
    ))
}
