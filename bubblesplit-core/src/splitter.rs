//! Fallback splitting for oversized sentences
//!
//! Commas are preferred break points; without any, the sentence is word
//! wrapped. Words are never broken, so a single word longer than the limit
//! becomes a part of its own, and a comma segment longer than the limit is
//! kept whole.

use crate::error::{Result, SplitError};
use crate::types::char_len;

/// Break `sentence` into parts of at most `max_chars` where possible
///
/// A sentence that already fits is returned as the only part. Every part is
/// trimmed and non-empty. Fails if `max_chars` is zero.
pub fn split_long(sentence: &str, max_chars: usize) -> Result<Vec<String>> {
    if max_chars == 0 {
        return Err(SplitError::invalid("max_chars must be greater than zero"));
    }
    Ok(split_parts(sentence, max_chars))
}

/// [`split_long`] for a `max_chars` already known to be positive
pub(crate) fn split_parts(sentence: &str, max_chars: usize) -> Vec<String> {
    let sentence = sentence.trim();
    if sentence.is_empty() {
        return Vec::new();
    }
    if char_len(sentence) <= max_chars {
        return vec![sentence.to_string()];
    }

    if sentence.contains(',') {
        let parts = split_at_commas(sentence, max_chars);
        if parts.is_empty() {
            // nothing but commas and whitespace
            return vec![sentence.to_string()];
        }
        parts
    } else {
        wrap_words(sentence, max_chars)
    }
}

/// Regroup comma-delimited chunks while the group stays under `max_chars`
///
/// The comma closing each group is dropped.
fn split_at_commas(sentence: &str, max_chars: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for chunk in sentence.split(',') {
        let chunk_len = char_len(chunk);
        if current.is_empty() {
            current.push_str(chunk);
            current.push(',');
            current_len = chunk_len + 1;
        } else if current_len + chunk_len + 1 < max_chars {
            current.push_str(chunk);
            current.push(',');
            current_len += chunk_len + 1;
        } else {
            close_group(&mut parts, &current);
            current.clear();
            current.push_str(chunk);
            current.push(',');
            current_len = chunk_len + 1;
        }
    }

    if !current.is_empty() {
        close_group(&mut parts, &current);
    }
    parts
}

fn close_group(parts: &mut Vec<String>, group: &str) {
    let part = group.trim().trim_end_matches(',').trim_end();
    if !part.is_empty() {
        parts.push(part.to_string());
    }
}

/// Greedy word wrap at whitespace
fn wrap_words(sentence: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in sentence.split_whitespace() {
        let word_len = char_len(word);
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + word_len + 1 <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += word_len + 1;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
