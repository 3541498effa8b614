//! Built-in rule tables
//!
//! The abbreviation and canned-phrase lists are plain data so that a TOML
//! configuration can replace or extend them without touching control flow.

use std::collections::{BTreeMap, HashSet};

/// Characters that terminate a sentence when followed by whitespace
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Default abbreviations by category, written without their trailing period
pub const DEFAULT_ABBREVIATIONS: &[(&str, &[&str])] = &[
    ("titles", &["Mr", "Mrs", "Dr", "Ms"]),
    ("comparison", &["vs"]),
];

/// Short replies that always get a bubble of their own (matched lower-cased)
pub const DEFAULT_CANNED_PHRASES: &[&str] = &[
    "ok!",
    "great!",
    "awesome!",
    "perfect!",
    "got it!",
    "sounds good!",
];

/// Default abbreviation table as an owned category map
pub fn default_abbreviations() -> BTreeMap<String, Vec<String>> {
    DEFAULT_ABBREVIATIONS
        .iter()
        .map(|(category, words)| {
            (
                category.to_string(),
                words.iter().map(|w| w.to_string()).collect(),
            )
        })
        .collect()
}

/// Default canned phrases as owned strings
pub fn default_canned_phrases() -> Vec<String> {
    DEFAULT_CANNED_PHRASES.iter().map(|p| p.to_string()).collect()
}

/// Abbreviation tokens whose trailing period never ends a sentence
#[derive(Debug, Clone, Default)]
pub struct AbbreviationTable {
    /// Tokens including the trailing period, e.g. `"Dr."`
    tokens: Vec<String>,
}

impl AbbreviationTable {
    /// Build from category lists; a missing trailing period is added
    pub fn from_categories<'a, I>(categories: I) -> Self
    where
        I: IntoIterator<Item = &'a Vec<String>>,
    {
        let mut tokens: Vec<String> = categories
            .into_iter()
            .flatten()
            .map(|word| {
                let word = word.trim();
                if word.ends_with('.') {
                    word.to_string()
                } else {
                    format!("{word}.")
                }
            })
            .collect();

        tokens.sort();
        tokens.dedup();
        Self { tokens }
    }

    /// All tokens with their trailing period
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Byte offsets of every period that belongs to an abbreviation in `text`
    ///
    /// Matching is a plain case-sensitive substring search, so "Dr." inside a
    /// longer word is protected as well.
    pub fn protected_offsets(&self, text: &str) -> HashSet<usize> {
        let mut offsets = HashSet::new();
        for token in &self.tokens {
            for (start, matched) in text.match_indices(token.as_str()) {
                offsets.insert(start + matched.len() - 1);
            }
        }
        offsets
    }
}

/// Lower-cased canned phrases
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    phrases: HashSet<String>,
}

impl PhraseTable {
    /// Build from phrases; entries are trimmed and lower-cased
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Exact match against an already trimmed sentence, ignoring case
    #[inline]
    pub fn contains(&self, trimmed: &str) -> bool {
        self.phrases.contains(&trimmed.to_lowercase())
    }

    /// Number of phrases in the table
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_table() -> AbbreviationTable {
        let categories = default_abbreviations();
        AbbreviationTable::from_categories(categories.values())
    }

    #[test]
    fn test_default_tokens_have_periods() {
        let table = default_table();
        assert_eq!(table.tokens(), &["Dr.", "Mr.", "Mrs.", "Ms.", "vs."]);
    }

    #[test]
    fn test_tokens_are_deduplicated() {
        let categories = vec![
            vec!["Dr".to_string(), "Dr.".to_string()],
            vec!["Dr".to_string()],
        ];
        let table = AbbreviationTable::from_categories(categories.iter());
        assert_eq!(table.tokens(), &["Dr."]);
    }

    #[test]
    fn test_protected_offsets() {
        let table = default_table();
        let text = "Ask Dr. Lee. Then Mrs. Park.";
        let offsets = table.protected_offsets(text);

        assert_eq!(offsets.len(), 2);
        assert!(offsets.contains(&6)); // "Dr."
        assert!(offsets.contains(&21)); // "Mrs."
        assert!(!offsets.contains(&11)); // "Lee."
    }

    #[test]
    fn test_protection_is_case_sensitive() {
        let table = default_table();
        assert!(table.protected_offsets("DR. Lee").is_empty());
        assert!(table.protected_offsets("cats VS. dogs").is_empty());
    }

    #[test]
    fn test_phrase_table_ignores_case() {
        let table = PhraseTable::new(DEFAULT_CANNED_PHRASES);
        assert_eq!(table.len(), 6);
        assert!(table.contains("Sounds Good!"));
        assert!(table.contains("OK!"));
        assert!(!table.contains("ok"));
        assert!(!table.contains("sounds good to me!"));
    }
}
