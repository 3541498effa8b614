//! Markdown output formatter

use super::{single_line, OutputFormatter};
use anyhow::Result;
use bubblesplit_core::Bubble;
use std::io::Write;

/// Markdown formatter - outputs bubbles as a numbered list per input
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    input_bubbles: usize,
    bubble_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            input_bubbles: 0,
            bubble_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_input(&mut self, source: &str) -> Result<()> {
        self.input_bubbles = 0;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_bubble(&mut self, bubble: &Bubble) -> Result<()> {
        self.input_bubbles += 1;
        self.bubble_count += 1;
        writeln!(
            self.writer,
            "{}. {}",
            self.input_bubbles,
            single_line(&bubble.text)
        )?;
        Ok(())
    }

    fn end_input(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total bubbles: {}*", self.bubble_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
