//! Plain text output formatter

use super::{single_line, OutputFormatter};
use anyhow::Result;
use bubblesplit_core::Bubble;
use std::io::Write;

/// Text formatter - one bubble per line, a blank line between inputs
pub struct TextFormatter<W: Write> {
    writer: W,
    inputs_seen: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            inputs_seen: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_input(&mut self, _source: &str) -> Result<()> {
        if self.inputs_seen > 0 {
            writeln!(self.writer)?;
        }
        self.inputs_seen += 1;
        Ok(())
    }

    fn format_bubble(&mut self, bubble: &Bubble) -> Result<()> {
        writeln!(self.writer, "{}", single_line(&bubble.text))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
