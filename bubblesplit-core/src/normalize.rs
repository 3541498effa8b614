//! Input normalization and short-circuiting

use crate::types::char_len;

/// Outcome of normalizing raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalized<'a> {
    /// Nothing but whitespace; the result is an empty sequence
    Empty,
    /// Fits in a single bubble as-is
    Short(&'a str),
    /// Needs segmentation
    Long(&'a str),
}

impl<'a> Normalized<'a> {
    /// The trimmed text, if any
    pub fn text(&self) -> Option<&'a str> {
        match self {
            Normalized::Empty => None,
            Normalized::Short(text) | Normalized::Long(text) => Some(text),
        }
    }
}

/// Trim `text` and decide whether it needs splitting at all
pub fn normalize(text: &str, max_chars: usize) -> Normalized<'_> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Normalized::Empty
    } else if char_len(trimmed) <= max_chars {
        Normalized::Short(trimmed)
    } else {
        Normalized::Long(trimmed)
    }
}
