//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::path::PathBuf;

/// Where a piece of text to split comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk
    File(PathBuf),
    /// Text given on the command line
    Inline(String),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Short label used in output and progress messages
    pub fn label(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Inline(_) => "<text>".to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }

    /// Read the full text of this source
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::File(path) => FileReader::read_text(path),
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::Stdin => FileReader::read_stdin(),
        }
    }
}
