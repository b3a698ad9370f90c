//! CV field extraction: best-effort recovery of structured candidate fields
//! from unstructured CV text.
//!
//! Every sub-extraction is independent and total: a field that no pattern
//! recognises is left empty, never reported as an error.

pub mod contact;
pub mod experience;
pub mod name;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::models::candidate::CandidateProfile;

pub use contact::{extract_contact_info, ContactInfo};
pub use experience::extract_experience_years;
pub use name::{extract_name, PersonName};

/// Structured fields recovered from a CV. Each one is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedCvData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_profile: Option<String>,
    pub skills: Vec<String>,
    pub total_experience_years: Option<f64>,
    pub education: Option<String>,
    pub parsed_cv_text: Option<String>,
}

impl From<ExtractedCvData> for CandidateProfile {
    fn from(data: ExtractedCvData) -> Self {
        CandidateProfile {
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            linkedin_profile: data.linkedin_profile,
            skills: data.skills,
            total_experience_years: data.total_experience_years,
            education: data.education,
            parsed_cv_text: data.parsed_cv_text,
        }
    }
}

/// Stateless extractor. Holds only the keyword catalog and the year used to
/// estimate experience from dated work history.
#[derive(Debug, Clone)]
pub struct CvExtractor {
    catalog: Arc<Catalog>,
    reference_year: i32,
}

impl CvExtractor {
    pub fn new(catalog: Arc<Catalog>, reference_year: i32) -> Self {
        Self {
            catalog,
            reference_year,
        }
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    pub fn extract(&self, cv_text: &str) -> ExtractedCvData {
        let contact = extract_contact_info(cv_text);
        let name = extract_name(cv_text);
        let skills = extract_skills(&self.catalog, cv_text);
        let total_experience_years = extract_experience_years(cv_text, self.reference_year);
        let education = extract_education(&self.catalog, cv_text);

        debug!(
            has_email = contact.email.is_some(),
            has_name = name.first_name.is_some(),
            skills = skills.len(),
            experience = ?total_experience_years,
            has_education = education.is_some(),
            "CV fields extracted"
        );

        ExtractedCvData {
            first_name: name.first_name,
            last_name: name.last_name,
            email: contact.email,
            phone: contact.phone,
            linkedin_profile: contact.linkedin,
            skills,
            total_experience_years,
            education,
            parsed_cv_text: (!cv_text.trim().is_empty()).then(|| cv_text.to_string()),
        }
    }
}

/// Catalog skills mentioned anywhere in the text (case-insensitive substring),
/// title-cased, in catalog order, without duplicates.
pub fn extract_skills(catalog: &Catalog, cv_text: &str) -> Vec<String> {
    let lower = cv_text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for skill in &catalog.cv_skills {
        if lower.contains(skill.term.as_str()) {
            let titled = title_case(&skill.term);
            if !found.contains(&titled) {
                found.push(titled);
            }
        }
    }

    found
}

/// Every line mentioning an education keyword, trimmed and newline-joined.
pub fn extract_education(catalog: &Catalog, cv_text: &str) -> Option<String> {
    let lines: Vec<&str> = cv_text
        .split('\n')
        .filter(|line| {
            let lower = line.to_lowercase();
            catalog
                .education_keywords
                .iter()
                .any(|kw| lower.contains(kw.as_str()))
        })
        .map(str::trim)
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Uppercases the first letter of every alphabetic run: "node.js" → "Node.Js".
fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut prev_alpha = false;
    for c in term.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}
