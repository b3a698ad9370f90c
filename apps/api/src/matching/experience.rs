use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::Catalog;
use crate::matching::{NEUTRAL_SCORE, NO_REQUIREMENT_SCORE};
use crate::text::first_number;

/// Explicit requirement phrasings, tried in order.
static REQUIREMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)([0-9]+)\+?\s*years?\s*of\s*experience",
        r"(?i)([0-9]+)\+?\s*years?\s*experience",
        r"(?i)minimum\s*([0-9]+)\s*years?",
        r"(?i)at\s*least\s*([0-9]+)\s*years?",
        r"(?i)([0-9]+)\+?\s*yrs?\s*experience",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Years of experience a job asks for: an explicit number if one is stated,
/// otherwise the years implied by its seniority wording.
pub fn required_experience(catalog: &Catalog, job_text: &str) -> Option<f64> {
    first_number(&REQUIREMENT_PATTERNS, job_text)
        .or_else(|| catalog.implied_seniority_years(job_text))
}

/// Meeting or exceeding the requirement scores 1.0; each missing year costs
/// `1 / required` of the score.
pub fn experience_match(catalog: &Catalog, candidate_years: Option<f64>, job_text: &str) -> f64 {
    let Some(years) = candidate_years else {
        return NEUTRAL_SCORE;
    };
    let Some(required) = required_experience(catalog, job_text) else {
        return NO_REQUIREMENT_SCORE;
    };

    // "0 years experience" is met by anyone
    if required <= 0.0 || years >= required {
        return 1.0;
    }

    let penalty = (required - years) / required;
    (1.0 - penalty).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(years: Option<f64>, job_text: &str) -> f64 {
        experience_match(&Catalog::default(), years, job_text)
    }

    #[test]
    fn test_unknown_candidate_experience_is_neutral() {
        assert_eq!(score(None, "10 years of experience"), 0.5);
        assert_eq!(score(None, ""), 0.5);
    }

    #[test]
    fn test_exact_match_is_one() {
        assert_eq!(score(Some(5.0), "5+ years experience with Python"), 1.0);
    }

    #[test]
    fn test_surplus_is_capped_at_one() {
        assert_eq!(score(Some(20.0), "3 years of experience"), 1.0);
    }

    #[test]
    fn test_deficit_is_proportional() {
        // required 8, has 6 → 1 - 2/8
        assert!((score(Some(6.0), "Minimum 8 years in backend roles") - 0.75).abs() < 1e-9);
        assert!((score(Some(1.0), "at least 4 years") - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_zero_experience_scores_zero_against_requirement() {
        assert_eq!(score(Some(0.0), "5 yrs experience"), 0.0);
    }

    #[test]
    fn test_seniority_fallback() {
        assert_eq!(
            required_experience(&Catalog::default(), "Senior Backend Engineer"),
            Some(8.0)
        );
        assert!((score(Some(2.0), "Senior Backend Engineer") - 0.25).abs() < 1e-9);
        assert_eq!(score(Some(1.0), "Graduate programme"), 1.0);
    }

    #[test]
    fn test_explicit_number_beats_seniority() {
        assert_eq!(
            required_experience(&Catalog::default(), "Senior engineer, 3 years experience"),
            Some(3.0)
        );
    }

    #[test]
    fn test_no_requirement_default() {
        assert_eq!(score(Some(4.0), "Friendly team building web apps"), 0.7);
    }

    #[test]
    fn test_zero_year_requirement_is_met() {
        assert_eq!(score(Some(0.0), "0 years experience needed"), 1.0);
    }
}
