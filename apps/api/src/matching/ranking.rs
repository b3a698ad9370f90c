//! Candidate ranking for a single job.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::matching::engine::MatchingEngine;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobRecord;

pub const DEFAULT_RANK_THRESHOLD: f64 = 0.6;

/// A candidate to rank. `candidate_id` is opaque and echoed back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankCandidate {
    pub candidate_id: Value,
    pub candidate: CandidateProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate_id: Value,
    pub candidate_name: String,
    pub candidate_email: Option<String>,
    pub matching_score: f64,
    pub candidate_skills: Vec<String>,
    pub candidate_experience: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    pub total_candidates: usize,
    pub qualified_candidates: usize,
    pub threshold: f64,
    pub matches: Vec<RankedCandidate>,
}

/// Scores every candidate against `job`, keeps those at or above
/// `threshold` and returns them best first. Ties keep input order.
pub fn rank_candidates(
    engine: &MatchingEngine,
    job: &JobRecord,
    candidates: &[RankCandidate],
    threshold: f64,
) -> RankingReport {
    let mut matches: Vec<RankedCandidate> = candidates
        .iter()
        .map(|entry| RankedCandidate {
            candidate_id: entry.candidate_id.clone(),
            candidate_name: entry.candidate.display_name(),
            candidate_email: entry.candidate.email.clone(),
            matching_score: engine.calculate_matching_score(&entry.candidate, job),
            candidate_skills: entry.candidate.skills.clone(),
            candidate_experience: entry.candidate.total_experience_years,
        })
        .filter(|ranked| ranked.matching_score >= threshold)
        .collect();

    matches.sort_by(|a, b| b.matching_score.total_cmp(&a.matching_score));

    RankingReport {
        total_candidates: candidates.len(),
        qualified_candidates: matches.len(),
        threshold,
        matches,
    }
}
