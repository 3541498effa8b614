//! Splitter configuration
//!
//! The TOML schema mirrors the struct layout:
//!
//! ```toml
//! [splitting]
//! max_chars = 160
//! oversize_factor = 1.5
//! short_exclamation_limit = 30
//!
//! [abbreviations]
//! titles = ["Mr", "Mrs", "Dr", "Ms"]
//! comparison = ["vs"]
//!
//! [standalone]
//! phrases = ["ok!", "great!"]
//! extend_defaults = true
//! ```
//!
//! Every section and key is optional.

use crate::error::{Result, SplitError};
use crate::tables;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default character guideline per bubble
pub const DEFAULT_MAX_CHARS: usize = 160;

/// Sentences longer than `max_chars * factor` go to the long-sentence splitter
pub const DEFAULT_OVERSIZE_FACTOR: f64 = 1.5;

/// Exclamations shorter than this stand alone
pub const DEFAULT_SHORT_EXCLAMATION_LIMIT: usize = 30;

/// Complete splitter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Length thresholds
    #[serde(default)]
    pub splitting: SplittingConfig,

    /// Abbreviations by category, written with or without the trailing period
    #[serde(default = "tables::default_abbreviations")]
    pub abbreviations: BTreeMap<String, Vec<String>>,

    /// Standalone classifier settings
    #[serde(default)]
    pub standalone: StandaloneConfig,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            splitting: SplittingConfig::default(),
            abbreviations: tables::default_abbreviations(),
            standalone: StandaloneConfig::default(),
        }
    }
}

/// Length thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplittingConfig {
    /// Guideline length of a bubble in characters
    pub max_chars: usize,
    /// Multiple of `max_chars` above which a sentence is oversized
    pub oversize_factor: f64,
    /// Exclamations strictly shorter than this are standalone
    pub short_exclamation_limit: usize,
}

impl Default for SplittingConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            oversize_factor: DEFAULT_OVERSIZE_FACTOR,
            short_exclamation_limit: DEFAULT_SHORT_EXCLAMATION_LIMIT,
        }
    }
}

/// Canned phrases that always stand alone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandaloneConfig {
    /// Phrases matched case-insensitively against the whole sentence
    pub phrases: Vec<String>,
    /// Merge `phrases` with the built-in list instead of replacing it
    pub extend_defaults: bool,
}

impl Default for StandaloneConfig {
    fn default() -> Self {
        Self {
            phrases: tables::default_canned_phrases(),
            extend_defaults: false,
        }
    }
}

impl SplitterConfig {
    /// Default configuration with a different `max_chars`
    pub fn with_max_chars(max_chars: usize) -> Result<Self> {
        Self::builder().max_chars(max_chars).build()
    }

    /// Create a builder starting from the defaults
    pub fn builder() -> SplitterConfigBuilder {
        SplitterConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source).map_err(|e| match e {
            SplitError::InvalidConfiguration(reason) => {
                SplitError::InvalidConfiguration(format!("{}: {reason}", path.display()))
            }
            other => other,
        })
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every value the engine relies on
    pub fn validate(&self) -> Result<()> {
        let splitting = &self.splitting;
        if splitting.max_chars == 0 {
            return Err(SplitError::invalid("max_chars must be greater than zero"));
        }
        if !splitting.oversize_factor.is_finite() || splitting.oversize_factor < 1.0 {
            return Err(SplitError::invalid(format!(
                "oversize_factor must be a finite number >= 1.0, got {}",
                splitting.oversize_factor
            )));
        }
        if splitting.short_exclamation_limit == 0 {
            return Err(SplitError::invalid(
                "short_exclamation_limit must be greater than zero",
            ));
        }

        for (category, words) in &self.abbreviations {
            for word in words {
                let trimmed = word.trim();
                if trimmed.is_empty() || trimmed == "." {
                    return Err(SplitError::invalid(format!(
                        "empty abbreviation in category '{category}'"
                    )));
                }
                if trimmed.chars().any(char::is_whitespace) {
                    return Err(SplitError::invalid(format!(
                        "abbreviation '{word}' in category '{category}' contains whitespace"
                    )));
                }
            }
        }

        if self.standalone.phrases.iter().any(|p| p.trim().is_empty()) {
            return Err(SplitError::invalid("canned phrases must not be empty"));
        }

        Ok(())
    }

    /// Guideline bubble length
    pub fn max_chars(&self) -> usize {
        self.splitting.max_chars
    }

    /// Length above which a sentence bypasses normal grouping
    pub fn oversize_threshold(&self) -> f64 {
        self.splitting.max_chars as f64 * self.splitting.oversize_factor
    }

    /// Effective canned phrases after applying `extend_defaults`
    pub fn effective_phrases(&self) -> Vec<String> {
        let mut phrases = if self.standalone.extend_defaults {
            tables::default_canned_phrases()
        } else {
            Vec::new()
        };
        phrases.extend(self.standalone.phrases.iter().cloned());
        phrases
    }
}

/// Builder for [`SplitterConfig`]
#[derive(Debug, Default)]
pub struct SplitterConfigBuilder {
    config: SplitterConfig,
}

impl SplitterConfigBuilder {
    /// Set the guideline bubble length
    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.config.splitting.max_chars = max_chars;
        self
    }

    /// Set the oversized-sentence factor
    pub fn oversize_factor(mut self, factor: f64) -> Self {
        self.config.splitting.oversize_factor = factor;
        self
    }

    /// Set the short-exclamation limit
    pub fn short_exclamation_limit(mut self, limit: usize) -> Self {
        self.config.splitting.short_exclamation_limit = limit;
        self
    }

    /// Add an abbreviation to a category
    pub fn abbreviation(mut self, category: &str, word: impl Into<String>) -> Self {
        self.config
            .abbreviations
            .entry(category.to_string())
            .or_default()
            .push(word.into());
        self
    }

    /// Drop every abbreviation, including the defaults
    pub fn clear_abbreviations(mut self) -> Self {
        self.config.abbreviations.clear();
        self
    }

    /// Add a canned phrase
    pub fn canned_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.config.standalone.phrases.push(phrase.into());
        self
    }

    /// Drop every canned phrase, including the defaults
    pub fn clear_canned_phrases(mut self) -> Self {
        self.config.standalone.phrases.clear();
        self.config.standalone.extend_defaults = false;
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<SplitterConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
