use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Only this many leading lines are considered for the name.
const NAME_SCAN_LINES: usize = 5;

static RE_HONORIFIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:mr\.?|ms\.?|mrs\.?|dr\.?)\s+").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonName {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Picks the first non-empty line among the first five that has no ASCII digit
/// and no `@`. That line alone decides: with 2–4 words after dropping an
/// honorific, the first and last words are the name; otherwise no name.
pub fn extract_name(cv_text: &str) -> PersonName {
    let Some(line) = cv_text
        .split('\n')
        .take(NAME_SCAN_LINES)
        .map(str::trim)
        .find(|line| is_name_candidate(line))
    else {
        return PersonName::default();
    };

    let stripped = RE_HONORIFIC.replace(line, "");
    let words: Vec<&str> = stripped.split_whitespace().collect();

    match words.as_slice() {
        [first, .., last] if words.len() <= 4 => PersonName {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
        },
        _ => PersonName::default(),
    }
}

fn is_name_candidate(line: &str) -> bool {
    !line.is_empty() && !line.chars().any(|c| c.is_ascii_digit()) && !line.contains('@')
}
