//! Error types for the splitting engine

use thiserror::Error;

/// Errors raised while building or loading a splitter configuration.
///
/// Splitting itself never fails: once a [`MessageSplitter`](crate::MessageSplitter)
/// exists, every input string maps to a (possibly empty) bubble sequence.
#[derive(Error, Debug)]
pub enum SplitError {
    /// A configuration value makes splitting meaningless (e.g. `max_chars == 0`)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// TOML configuration could not be parsed
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SplitError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SplitError::InvalidConfiguration(reason.into())
    }
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, SplitError>;
