//! Pipeline entry point
//!
//! [`MessageSplitter`] wires the stages together:
//! normalize -> segment -> aggregate (classify and split inline) -> format.

use crate::aggregator::Aggregator;
use crate::classifier::StandaloneClassifier;
use crate::config::SplitterConfig;
use crate::delivery::format_for_bridge;
use crate::error::Result;
use crate::normalize::{normalize, Normalized};
use crate::segmenter::Segmenter;
use crate::tables::{AbbreviationTable, PhraseTable};
use crate::types::{Bubble, BubbleOrigin, DeliveryRecord, SentenceUnit};
use std::sync::OnceLock;

/// Configured splitting pipeline
///
/// Immutable after construction; share it freely across threads.
#[derive(Debug, Clone)]
pub struct MessageSplitter {
    config: SplitterConfig,
    segmenter: Segmenter,
    classifier: StandaloneClassifier,
}

impl MessageSplitter {
    /// Create a splitter with the built-in tables and `max_chars = 160`
    pub fn new() -> Self {
        // The default configuration always validates
        Self::from_validated(SplitterConfig::default())
    }

    /// Create a splitter with the built-in tables and a custom `max_chars`
    pub fn with_max_chars(max_chars: usize) -> Result<Self> {
        Self::with_config(SplitterConfig::with_max_chars(max_chars)?)
    }

    /// Create a splitter from a configuration, validating it first
    pub fn with_config(config: SplitterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: SplitterConfig) -> Self {
        let abbreviations = AbbreviationTable::from_categories(config.abbreviations.values());
        let phrases = PhraseTable::new(config.effective_phrases());
        let classifier =
            StandaloneClassifier::new(phrases, config.splitting.short_exclamation_limit);

        Self {
            segmenter: Segmenter::new(abbreviations),
            classifier,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Split `text` into message bubbles
    pub fn split(&self, text: &str) -> Vec<String> {
        self.split_bubbles(text)
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Split `text` into bubbles, keeping track of how each was produced
    pub fn split_bubbles(&self, text: &str) -> Vec<Bubble> {
        let max_chars = self.config.max_chars();

        let text = match normalize(text, max_chars) {
            Normalized::Empty => {
                log::debug!("blank input, nothing to send");
                return Vec::new();
            }
            Normalized::Short(text) => {
                log::debug!("input fits in one bubble");
                return vec![Bubble::new(text, BubbleOrigin::Whole)];
            }
            Normalized::Long(text) => text,
        };

        let sentences = self.segmenter.segment(text);
        let sentence_count = sentences.len();
        let bubbles = Aggregator::from_config(&self.classifier, &self.config).aggregate(sentences);

        log::debug!(
            "split {} sentences into {} bubbles (max_chars = {})",
            sentence_count,
            bubbles.len(),
            max_chars
        );
        bubbles
    }

    /// Split `text` and wrap the bubbles as delivery records
    pub fn split_for_delivery(&self, text: &str) -> Vec<DeliveryRecord> {
        format_for_bridge(self.split(text))
    }

    /// Sentence units of `text` under this splitter's abbreviations
    pub fn segment(&self, text: &str) -> Vec<SentenceUnit> {
        self.segmenter.segment(text)
    }

    /// Whether `sentence` would get a bubble of its own
    pub fn is_standalone(&self, sentence: &SentenceUnit) -> bool {
        self.classifier.is_standalone(sentence)
    }

    /// Classifier built from this splitter's phrase table
    pub fn classifier(&self) -> &StandaloneClassifier {
        &self.classifier
    }
}

impl Default for MessageSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared splitter with the built-in configuration
pub(crate) fn default_splitter() -> &'static MessageSplitter {
    static DEFAULT: OnceLock<MessageSplitter> = OnceLock::new();
    DEFAULT.get_or_init(MessageSplitter::new)
}
