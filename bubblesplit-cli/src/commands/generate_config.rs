//! Generate config command implementation

use anyhow::{Context, Result};
use bubblesplit_core::config::{
    DEFAULT_MAX_CHARS, DEFAULT_OVERSIZE_FACTOR, DEFAULT_SHORT_EXCLAMATION_LIMIT,
};
use bubblesplit_core::tables;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to customize the rules");
        println!("2. Validate your configuration:");
        println!("   bubblesplit validate -c {}", self.output.display());
        println!("3. Use it for splitting:");
        println!(
            "   bubblesplit split -i reply.txt -c {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Default configuration as an annotated TOML document
pub fn generate_template() -> String {
    let mut abbreviations = String::new();
    for (category, words) in tables::default_abbreviations() {
        abbreviations.push_str(&format!("{category} = {}\n", toml_array(&words)));
    }

    format!(
        r#"# bubblesplit configuration

[splitting]
# Guideline bubble length in characters
max_chars = {DEFAULT_MAX_CHARS}
# A sentence longer than max_chars * oversize_factor is split on its own
oversize_factor = {DEFAULT_OVERSIZE_FACTOR:?}
# Exclamations shorter than this get a bubble of their own
short_exclamation_limit = {DEFAULT_SHORT_EXCLAMATION_LIMIT}

# Abbreviations organized by category, written without the trailing period.
# Category names are arbitrary.
[abbreviations]
{abbreviations}
[standalone]
# Short replies that always stand alone (matched ignoring case)
phrases = {phrases}
# true: add these phrases to the built-in list instead of replacing it
extend_defaults = false

[output]
# text, json or markdown
default_format = "text"
pretty_json = true
"#,
        phrases = toml_array(&tables::default_canned_phrases()),
    )
}

fn toml_array(items: &[String]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| toml::Value::String(item.clone()).to_string())
        .collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CliConfig, OutputConfig};
    use bubblesplit_core::SplitterConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_matches_defaults() {
        let template = generate_template();
        let config = SplitterConfig::from_toml_str(&template).unwrap();
        assert_eq!(config, SplitterConfig::default());

        let cli: CliConfig = toml::from_str(&template).unwrap();
        assert_eq!(cli.output, OutputConfig::default());
    }

    #[test]
    fn test_template_is_annotated() {
        let template = generate_template();
        assert!(template.contains("# Guideline bubble length"));
        assert!(template.contains("titles = [\"Mr\", \"Mrs\", \"Dr\", \"Ms\"]"));
        assert!(template.contains("oversize_factor = 1.5"));
    }

    #[test]
    fn test_execute_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("bubblesplit.toml");
        let args = GenerateConfigArgs {
            output: output.clone(),
        };

        args.execute().unwrap();
        assert_eq!(std::fs::read_to_string(output).unwrap(), generate_template());
    }

    #[test]
    fn test_execute_unwritable_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/bubblesplit.toml"),
        };
        let error = args.execute().unwrap_err();
        assert!(error.to_string().contains("Failed to write"));
    }
}
