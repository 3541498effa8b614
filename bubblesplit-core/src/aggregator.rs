//! Greedy grouping of sentences into bubbles
//!
//! The aggregator is a two-state machine folded over the sentence sequence:
//! either no bubble is in progress ([`Pending::Empty`]) or sentences are being
//! accumulated ([`Pending::Accumulating`]). Each sentence is handled by the
//! first rule that applies:
//!
//! 1. An oversized sentence (longer than `max_chars * oversize_factor`)
//!    flushes the pending bubble and is emitted as long-sentence splitter
//!    parts.
//! 2. With nothing pending, the sentence starts a bubble; a standalone
//!    sentence is flushed at once.
//! 3. If the sentence fits after the pending text (plus one space), it is
//!    appended; a question closes the bubble.
//! 4. Otherwise the pending bubble is flushed and the sentence is handled as
//!    in rule 2.
//!
//! The pass never looks ahead and never reorders sentences.

use crate::classifier::StandaloneClassifier;
use crate::config::SplitterConfig;
use crate::error::{Result, SplitError};
use crate::splitter::split_parts;
use crate::types::{Bubble, BubbleOrigin, SentenceUnit};

/// Bubble being accumulated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulating {
    text: String,
    len: usize,
}

impl Accumulating {
    fn start(sentence: SentenceUnit) -> Self {
        let len = sentence.len();
        Self {
            text: sentence.content().to_string(),
            len,
        }
    }

    fn push(&mut self, sentence: &SentenceUnit) {
        self.text.push(' ');
        self.text.push_str(sentence.content());
        self.len += sentence.len() + 1;
    }

    fn would_be_len(&self, sentence: &SentenceUnit) -> usize {
        self.len + sentence.len() + 1
    }

    fn into_bubble(self) -> Bubble {
        Bubble::new(self.text, BubbleOrigin::Grouped)
    }
}

/// Aggregator state between sentences
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Pending {
    /// No bubble in progress
    #[default]
    Empty,
    /// One or more sentences accumulated but not yet flushed
    Accumulating(Accumulating),
}

#[derive(Debug, Default)]
struct Fold {
    bubbles: Vec<Bubble>,
    pending: Pending,
}

impl Fold {
    fn flush(&mut self) {
        if let Pending::Accumulating(current) = std::mem::take(&mut self.pending) {
            self.bubbles.push(current.into_bubble());
        }
    }

    fn finish(mut self) -> Vec<Bubble> {
        self.flush();
        self.bubbles
    }
}

/// Groups sentences into bubbles under a length guideline
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    classifier: &'a StandaloneClassifier,
    max_chars: usize,
    oversize_threshold: f64,
}

impl<'a> Aggregator<'a> {
    /// Create an aggregator; sentences longer than `oversize_threshold`
    /// characters are handed to the long-sentence splitter
    ///
    /// Fails if `max_chars` is zero or the threshold is below `max_chars`.
    pub fn new(
        classifier: &'a StandaloneClassifier,
        max_chars: usize,
        oversize_threshold: f64,
    ) -> Result<Self> {
        if max_chars == 0 {
            return Err(SplitError::invalid("max_chars must be greater than zero"));
        }
        if oversize_threshold.is_nan() || oversize_threshold < max_chars as f64 {
            return Err(SplitError::invalid(format!(
                "oversize threshold {oversize_threshold} is below max_chars {max_chars}"
            )));
        }
        Ok(Self {
            classifier,
            max_chars,
            oversize_threshold,
        })
    }

    /// Aggregator for a configuration that already passed validation
    pub(crate) fn from_config(
        classifier: &'a StandaloneClassifier,
        config: &SplitterConfig,
    ) -> Self {
        Self {
            classifier,
            max_chars: config.max_chars(),
            oversize_threshold: config.oversize_threshold(),
        }
    }

    /// Run the state machine over `sentences`
    pub fn aggregate<I>(&self, sentences: I) -> Vec<Bubble>
    where
        I: IntoIterator<Item = SentenceUnit>,
    {
        sentences
            .into_iter()
            .fold(Fold::default(), |fold, sentence| self.step(fold, sentence))
            .finish()
    }

    fn step(&self, mut fold: Fold, sentence: SentenceUnit) -> Fold {
        if sentence.len() as f64 > self.oversize_threshold {
            log::trace!("oversized sentence ({} chars), splitting", sentence.len());
            fold.flush();
            fold.bubbles.extend(
                split_parts(sentence.content(), self.max_chars)
                    .into_iter()
                    .map(|part| Bubble::new(part, BubbleOrigin::Split)),
            );
            return fold;
        }

        match std::mem::take(&mut fold.pending) {
            Pending::Empty => self.start(&mut fold, sentence),
            Pending::Accumulating(mut current) => {
                if current.would_be_len(&sentence) <= self.max_chars {
                    current.push(&sentence);
                    if sentence.ends_with_question() {
                        log::trace!("question closes bubble");
                        fold.bubbles.push(current.into_bubble());
                    } else {
                        fold.pending = Pending::Accumulating(current);
                    }
                } else {
                    log::trace!("bubble full at {} chars", current.len);
                    fold.bubbles.push(current.into_bubble());
                    self.start(&mut fold, sentence);
                }
            }
        }
        fold
    }

    fn start(&self, fold: &mut Fold, sentence: SentenceUnit) {
        if self.classifier.is_standalone(&sentence) {
            log::trace!("standalone: {:?}", sentence.content());
            fold.bubbles
                .push(Bubble::new(sentence.content(), BubbleOrigin::Standalone));
        } else {
            fold.pending = Pending::Accumulating(Accumulating::start(sentence));
        }
    }
}
