//! Sentence boundary detection
//!
//! A boundary is a run of `.`, `!` or `?` followed by whitespace. The run
//! stays attached to the sentence it ends, so "Wait... what?! Really." yields
//! `["Wait...", "what?!", "Really."]`. Periods that close a known
//! abbreviation ("Dr.", "vs.") are skipped when looking for the run.
//!
//! This is a punctuation heuristic, not a linguistic parser: decimal numbers
//! survive only because "5.50" has no whitespace after the dot, and a
//! sentence ending in an abbreviation is merged with the next one.

use crate::tables::AbbreviationTable;
use crate::types::SentenceUnit;
use regex::Regex;
use std::sync::OnceLock;

fn boundary_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[.!?]+\s+").expect("boundary pattern is valid"))
}

/// Splits text into [`SentenceUnit`]s
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    abbreviations: AbbreviationTable,
}

impl Segmenter {
    /// Create a segmenter protecting the given abbreviations
    pub fn new(abbreviations: AbbreviationTable) -> Self {
        Self { abbreviations }
    }

    /// Abbreviations this segmenter protects
    pub fn abbreviations(&self) -> &AbbreviationTable {
        &self.abbreviations
    }

    /// Split `text` into sentences in input order
    ///
    /// Blank sentences are dropped, so the result is empty only for blank
    /// input.
    pub fn segment(&self, text: &str) -> Vec<SentenceUnit> {
        let protected = self.abbreviations.protected_offsets(text);
        let mut sentences = Vec::new();
        let mut start = 0;

        for m in boundary_pattern().find_iter(text) {
            // Terminators are ASCII, so byte steps are char steps here
            let run_end = m.start() + m.as_str().trim_end().len();
            let mut run_start = m.start();
            while run_start < run_end && protected.contains(&run_start) {
                run_start += 1;
            }
            if run_start == run_end {
                continue;
            }

            sentences.extend(SentenceUnit::new(&text[start..run_end]));
            start = m.end();
        }

        sentences.extend(SentenceUnit::new(&text[start..]));
        sentences
    }
}
