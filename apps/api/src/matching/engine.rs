use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::errors::MatchConfigError;
use crate::matching::education::education_match;
use crate::matching::experience::experience_match;
use crate::matching::keyword::keyword_match;
use crate::matching::skills::skills_match;
use crate::matching::weights::MatchWeights;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobRecord;
use crate::text::tokenize;

/// The four sub-scores behind an overall match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skills_match: f64,
    pub experience_match: f64,
    pub education_match: f64,
    pub keyword_match: f64,
}

impl MatchBreakdown {
    fn rounded(self) -> Self {
        Self {
            skills_match: round3(self.skills_match),
            experience_match: round3(self.experience_match),
            education_match: round3(self.education_match),
            keyword_match: round3(self.keyword_match),
        }
    }
}

/// Overall score plus the rationale behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_score: f64,
    pub breakdown: MatchBreakdown,
    pub weights: MatchWeights,
}

/// Scores candidate/job compatibility.
///
/// Holds only immutable configuration, so one instance can be shared across
/// threads and every call is independent of the others.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    catalog: Arc<Catalog>,
    weights: MatchWeights,
}

impl MatchingEngine {
    pub fn new(catalog: Arc<Catalog>, weights: MatchWeights) -> Result<Self, MatchConfigError> {
        weights.validate()?;
        Ok(Self { catalog, weights })
    }

    /// Same catalog, different weights.
    pub fn with_weights(&self, weights: MatchWeights) -> Result<Self, MatchConfigError> {
        Self::new(Arc::clone(&self.catalog), weights)
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Unrounded sub-scores.
    pub fn sub_scores(&self, candidate: &CandidateProfile, job: &JobRecord) -> MatchBreakdown {
        let job_text = job.match_text();
        let job_tokens = tokenize(job_text.as_str());
        let candidate_tokens = tokenize(candidate.parsed_cv_text.as_deref());

        MatchBreakdown {
            skills_match: skills_match(&self.catalog, &candidate.skills, &job_tokens),
            experience_match: experience_match(
                &self.catalog,
                candidate.total_experience_years,
                &job_text,
            ),
            education_match: education_match(
                &self.catalog,
                candidate.education.as_deref(),
                &job_text,
            ),
            keyword_match: keyword_match(&candidate_tokens, &job_tokens),
        }
    }

    /// Overall compatibility in [0, 1], rounded to 3 decimals.
    pub fn calculate_matching_score(&self, candidate: &CandidateProfile, job: &JobRecord) -> f64 {
        let scores = self.sub_scores(candidate, job);
        round3(self.weights.combine(&scores))
    }

    /// Overall score together with the rounded sub-scores and the weights used.
    /// `overall_score` always equals `calculate_matching_score` for the same input.
    pub fn match_details(&self, candidate: &CandidateProfile, job: &JobRecord) -> MatchResult {
        let scores = self.sub_scores(candidate, job);
        let overall_score = round3(self.weights.combine(&scores));

        debug!(
            overall_score,
            skills = scores.skills_match,
            experience = scores.experience_match,
            education = scores.education_match,
            keyword = scores.keyword_match,
            "Match computed"
        );

        MatchResult {
            overall_score,
            breakdown: scores.rounded(),
            weights: self.weights,
        }
    }
}

/// Three decimals, ties to even.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round_ties_even() / 1000.0
}
