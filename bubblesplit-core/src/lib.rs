//! Natural message segmentation
//!
//! Turns one block of generated text into the ordered list of short chat
//! messages ("bubbles") a person would send: sentences are grouped up to a
//! length guideline, questions and short exclamations get their own bubble,
//! and oversized sentences are broken at commas or word boundaries.
//!
//! ```
//! use bubblesplit_core::{format_for_bridge, split_into_natural_messages};
//!
//! let messages = split_into_natural_messages("Hey! How are you?", 160).unwrap();
//! assert_eq!(messages, vec!["Hey! How are you?"]);
//!
//! let records = format_for_bridge(messages);
//! assert!(records[0].typing_delay_hint.is_none());
//! ```
//!
//! The pipeline is stateless; a [`MessageSplitter`] can be shared between
//! threads and called concurrently.

#![warn(missing_docs)]

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod delivery;
pub mod error;
pub mod normalize;
pub mod processor;
pub mod segmenter;
pub mod splitter;
pub mod tables;
pub mod types;

// Re-export key types
pub use aggregator::{Aggregator, Pending};
pub use classifier::StandaloneClassifier;
pub use config::{SplitterConfig, SplitterConfigBuilder, DEFAULT_MAX_CHARS};
pub use delivery::format_for_bridge;
pub use error::{Result, SplitError};
pub use normalize::{normalize, Normalized};
pub use processor::MessageSplitter;
pub use segmenter::Segmenter;
pub use splitter::split_long;
pub use types::{Bubble, BubbleOrigin, DeliveryRecord, SentenceUnit};

use processor::default_splitter;

// Convenience functions

/// Split `text` into natural message bubbles using the built-in tables
///
/// Blank input yields no messages; input of at most `max_chars` characters
/// yields exactly the trimmed input. Fails only if `max_chars` is zero.
pub fn split_into_natural_messages(text: &str, max_chars: usize) -> Result<Vec<String>> {
    if max_chars == DEFAULT_MAX_CHARS {
        return Ok(default_splitter().split(text));
    }
    Ok(MessageSplitter::with_max_chars(max_chars)?.split(text))
}

/// Segment `text` into sentences with the built-in abbreviation table
pub fn segment(text: &str) -> Vec<SentenceUnit> {
    default_splitter().segment(text)
}

/// Whether `sentence` must stand alone under the built-in phrase table
pub fn is_standalone(sentence: &SentenceUnit) -> bool {
    default_splitter().is_standalone(sentence)
}

/// Group sentences into bubbles using the built-in classifier
///
/// Sentences longer than 1.5 x `max_chars` are broken up with [`split_long`].
/// Fails if `max_chars` is zero.
pub fn aggregate<I>(sentences: I, max_chars: usize) -> Result<Vec<Bubble>>
where
    I: IntoIterator<Item = SentenceUnit>,
{
    let splitter = default_splitter();
    let threshold = max_chars as f64 * config::DEFAULT_OVERSIZE_FACTOR;
    Ok(Aggregator::new(splitter.classifier(), max_chars, threshold)?.aggregate(sentences))
}
