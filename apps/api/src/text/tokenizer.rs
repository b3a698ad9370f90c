use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

/// Function words dropped before any comparison.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
    "between", "among", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "can",
    "this", "that", "these", "those",
];

/// Tokens of this many characters or fewer are discarded.
const MIN_TOKEN_CHARS: usize = 3;

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

static RE_NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Lowercases `text`, turns punctuation into whitespace and returns the
/// remaining words in source order, minus stop words and short tokens.
///
/// Accepts `&str` or `Option<&str>`; `None` and `""` both give an empty vec.
pub fn tokenize<'a>(text: impl Into<Option<&'a str>>) -> Vec<String> {
    let text = match text.into() {
        Some(t) if !t.is_empty() => t,
        _ => return Vec::new(),
    };

    let lower = text.to_lowercase();
    let cleaned = RE_NON_WORD.replace_all(&lower, " ");

    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS && !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Occurrence count per token. Ordered so iteration is deterministic.
pub fn term_frequencies(tokens: &[String]) -> BTreeMap<&str, u32> {
    let mut freq = BTreeMap::new();
    for token in tokens {
        *freq.entry(token.as_str()).or_insert(0) += 1;
    }
    freq
}
