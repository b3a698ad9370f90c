use crate::catalog::{Catalog, EducationLevel};
use crate::matching::{NEUTRAL_SCORE, NO_REQUIREMENT_SCORE};

const ONE_LEVEL_BELOW_SCORE: f64 = 0.8;
const FAR_BELOW_SCORE: f64 = 0.4;

/// Compares the highest education level named by the candidate with the
/// highest level named in the job text.
pub fn education_match(
    catalog: &Catalog,
    candidate_education: Option<&str>,
    job_text: &str,
) -> f64 {
    let Some(education) = candidate_education.filter(|e| !e.trim().is_empty()) else {
        return NEUTRAL_SCORE;
    };

    let required = catalog.highest_education_level(job_text);
    if required == EducationLevel::Unspecified {
        return NO_REQUIREMENT_SCORE;
    }

    let candidate = catalog.highest_education_level(education);
    level_score(candidate, required)
}

fn level_score(candidate: EducationLevel, required: EducationLevel) -> f64 {
    if candidate >= required {
        1.0
    } else if candidate.rank() + 1 == required.rank() {
        ONE_LEVEL_BELOW_SCORE
    } else {
        FAR_BELOW_SCORE
    }
}
