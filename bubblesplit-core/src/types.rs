//! Value types flowing through the pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Number of Unicode code points in `text`
///
/// All length thresholds in this crate are measured this way.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// One sentence extracted from the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceUnit {
    content: String,
    ends_with_question: bool,
    length: usize,
}

impl SentenceUnit {
    /// Create a unit from sentence text; returns `None` if it is blank
    pub fn new(content: &str) -> Option<Self> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }

        Some(Self {
            content: content.to_string(),
            ends_with_question: content.ends_with('?'),
            length: char_len(content),
        })
    }

    /// Trimmed sentence text including its terminal punctuation
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the sentence ends with `?`
    pub fn ends_with_question(&self) -> bool {
        self.ends_with_question
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.length
    }

    /// Always false; blank units are never constructed
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Display for SentenceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// How a bubble came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BubbleOrigin {
    /// The whole (short) input, returned without segmentation
    Whole,
    /// One or more sentences accumulated under the length guideline
    Grouped,
    /// A single sentence the classifier isolated
    Standalone,
    /// A fragment of an oversized sentence
    Split,
}

/// One outgoing chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bubble {
    /// Trimmed, non-empty message text
    pub text: String,
    /// Which path produced the bubble
    pub origin: BubbleOrigin,
}

impl Bubble {
    pub(crate) fn new(text: impl Into<String>, origin: BubbleOrigin) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    /// Always false for bubbles produced by the engine
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<Bubble> for String {
    fn from(bubble: Bubble) -> Self {
        bubble.text
    }
}

/// Record handed to the downstream sender
///
/// The engine never sets the timing hints; the sender decides typing and
/// inter-message delays itself. Hints serialize as fractional seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    /// Message text
    pub text: String,
    /// How long to show a typing indicator
    #[serde(rename = "typing_delay", default, with = "optional_secs")]
    pub typing_delay_hint: Option<Duration>,
    /// Pause before this message is sent
    #[serde(rename = "delay_before", default, with = "optional_secs")]
    pub delay_before_hint: Option<Duration>,
}

impl DeliveryRecord {
    /// Record with both timing hints unset
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            typing_delay_hint: None,
            delay_before_hint: None,
        }
    }
}

mod optional_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_some(&d.as_secs_f64()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        let secs = Option::<f64>::deserialize(d)?;
        match secs {
            Some(s) if s.is_finite() && s >= 0.0 => Ok(Some(Duration::from_secs_f64(s))),
            Some(s) => Err(serde::de::Error::custom(format!(
                "delay must be a non-negative number of seconds, got {s}"
            ))),
            None => Ok(None),
        }
    }
}
