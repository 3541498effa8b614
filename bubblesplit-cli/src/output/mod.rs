//! Output formatting module

use anyhow::Result;
use bubblesplit_core::Bubble;
use std::borrow::Cow;

/// Trait for output formatters
///
/// Calls arrive as `begin_input`, any number of `format_bubble`, then
/// `end_input`, repeated per input, and a single `finish` at the end.
pub trait OutputFormatter: Send + Sync {
    /// Start the bubbles of one input
    fn begin_input(&mut self, source: &str) -> Result<()>;

    /// Format and output a single bubble
    fn format_bubble(&mut self, bubble: &Bubble) -> Result<()>;

    /// Close the bubbles of the current input
    fn end_input(&mut self) -> Result<()> {
        Ok(())
    }

    /// Finalize output (e.g., write the JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Bubble text with line breaks folded into single spaces
///
/// Line-oriented formats need one bubble per line.
pub(crate) fn single_line(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }
    let lines: Vec<&str> = text
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    Cow::Owned(lines.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_passthrough() {
        assert!(matches!(single_line("Hi there."), Cow::Borrowed("Hi there.")));
    }

    #[test]
    fn test_single_line_folds_breaks() {
        assert_eq!(single_line("Hi\nthere"), "Hi there");
        assert_eq!(single_line("One.\r\n\r\n  Two."), "One. Two.");
        assert_eq!(single_line("a\rb"), "a b");
    }
}
