//! Word-level eligibility filtering.
//!
//! Decides which token positions may be selected for mutation: punctuation
//! (when disabled), exact stopwords, and regex stopwords are excluded.

use regex::Regex;

/// True when the token is non-empty and consists entirely of ASCII
/// punctuation. The default tokenizer only emits single-character
/// punctuation tokens, so this covers runs from custom tokenizers too.
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation())
}

/// True when the leftmost match of `pattern` begins at the start of `text`.
pub fn matches_at_start(pattern: &Regex, text: &str) -> bool {
    pattern.find(text).is_some_and(|m| m.start() == 0)
}

/// Test a token against the stopword pattern.
///
/// The raw token and its space-padded variants are all tried, approximating
/// word-boundary matching for patterns written without anchors.
fn matches_stopword_pattern(pattern: &Regex, token: &str) -> bool {
    matches_at_start(pattern, token)
        || matches_at_start(pattern, &format!(" {token} "))
        || matches_at_start(pattern, &format!(" {token}"))
        || matches_at_start(pattern, &format!("{token} "))
}

/// Eligibility filter over compound token records.
///
/// `project` extracts the text field tested against the filters; indices of
/// surviving records are returned in original order.
pub fn eligible_indices_with<T, F>(
    tokens: &[T],
    project: F,
    stopwords: &[String],
    stopword_pattern: Option<&Regex>,
    include_special_char: bool,
) -> Vec<usize>
where
    F: Fn(&T) -> &str,
{
    let mut eligible = Vec::new();
    for (idx, record) in tokens.iter().enumerate() {
        let token = project(record);
        if !include_special_char && is_punctuation(token) {
            continue;
        }
        if stopwords.iter().any(|s| s == token) {
            continue;
        }
        if let Some(pattern) = stopword_pattern {
            if matches_stopword_pattern(pattern, token) {
                continue;
            }
        }
        eligible.push(idx);
    }
    eligible
}

/// Ordered token positions that survive punctuation and stopword filtering.
pub fn eligible_indices(
    tokens: &[String],
    stopwords: &[String],
    stopword_pattern: Option<&Regex>,
    include_special_char: bool,
) -> Vec<usize> {
    eligible_indices_with(
        tokens,
        |t| t.as_str(),
        stopwords,
        stopword_pattern,
        include_special_char,
    )
}
