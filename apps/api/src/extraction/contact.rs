use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::first_capture;

static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap());

/// Tried in order: US, international, bare 10 digits.
static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\+?1?[-.\s]?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})",
        r"\+?([0-9]{1,4})[-.\s]?([0-9]{3,4})[-.\s]?([0-9]{3,4})[-.\s]?([0-9]{3,4})",
        r"\b\d{10}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static RE_LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/([a-zA-Z0-9-]+)").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
}

pub fn extract_contact_info(cv_text: &str) -> ContactInfo {
    ContactInfo {
        email: extract_email(cv_text),
        phone: extract_phone(cv_text),
        linkedin: extract_linkedin(cv_text),
    }
}

pub fn extract_email(cv_text: &str) -> Option<String> {
    RE_EMAIL.find(cv_text).map(|m| m.as_str().to_string())
}

/// The optional separator in front of a number can swallow a leading space,
/// so the match is trimmed.
pub fn extract_phone(cv_text: &str) -> Option<String> {
    first_capture(&PHONE_PATTERNS, cv_text, 0)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
}

pub fn extract_linkedin(cv_text: &str) -> Option<String> {
    RE_LINKEDIN
        .captures(cv_text)
        .and_then(|caps| caps.get(1))
        .map(|handle| format!("https://linkedin.com/in/{}", handle.as_str()))
}
