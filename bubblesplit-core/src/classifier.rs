//! Standalone sentence classification

use crate::config::DEFAULT_SHORT_EXCLAMATION_LIMIT;
use crate::tables::{PhraseTable, DEFAULT_CANNED_PHRASES};
use crate::types::SentenceUnit;

/// Decides which sentences must occupy a bubble of their own
#[derive(Debug, Clone)]
pub struct StandaloneClassifier {
    phrases: PhraseTable,
    exclamation_limit: usize,
}

impl Default for StandaloneClassifier {
    fn default() -> Self {
        Self::new(
            PhraseTable::new(DEFAULT_CANNED_PHRASES),
            DEFAULT_SHORT_EXCLAMATION_LIMIT,
        )
    }
}

impl StandaloneClassifier {
    /// Create a classifier from a phrase table and exclamation limit
    pub fn new(phrases: PhraseTable, exclamation_limit: usize) -> Self {
        Self {
            phrases,
            exclamation_limit,
        }
    }

    /// Questions, short exclamations and canned replies stand alone
    pub fn is_standalone(&self, sentence: &SentenceUnit) -> bool {
        let text = sentence.content();

        if sentence.ends_with_question() {
            return true;
        }
        if text.ends_with('!') && sentence.len() < self.exclamation_limit {
            return true;
        }
        self.phrases.contains(text)
    }
}
