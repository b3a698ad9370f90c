use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::first_number;

/// Explicit "N years" phrasings, tried in order.
static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)([0-9]+)\+?\s*years?\s*of\s*experience",
        r"(?i)([0-9]+)\+?\s*years?\s*experience",
        r"(?i)experience:\s*([0-9]+)\+?\s*years?",
        r"(?i)([0-9]+)\+?\s*yrs?\s*experience",
        r"(?i)([0-9]+)\+?\s*year\s*experience",
        r"(?i)minimum\s*([0-9]+)\s*years?",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static RE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)[0-9]{2}\b").unwrap());

/// Years of experience stated in, or inferred from, CV text.
///
/// An explicit phrase wins. Otherwise the calendar years mentioned in the
/// text are used: with at least two of them and the latest no older than
/// `reference_year - 1`, the estimate is `reference_year - earliest`.
pub fn extract_experience_years(cv_text: &str, reference_year: i32) -> Option<f64> {
    first_number(&EXPERIENCE_PATTERNS, cv_text)
        .or_else(|| infer_from_work_history(cv_text, reference_year))
}

fn infer_from_work_history(cv_text: &str, reference_year: i32) -> Option<f64> {
    let years: Vec<i32> = RE_YEAR
        .find_iter(cv_text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();

    if years.len() < 2 {
        return None;
    }

    let earliest = *years.iter().min()?;
    let latest = *years.iter().max()?;

    if latest >= reference_year - 1 {
        Some(f64::from((reference_year - earliest).max(0)))
    } else {
        None
    }
}
