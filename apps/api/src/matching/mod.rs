//! CV-to-job matching engine.
//!
//! Four independent sub-scores (skills, experience, education, keyword) are
//! blended with configurable weights into one compatibility score. Every
//! sub-score has a defined fallback for missing data, so scoring is total.

pub mod education;
pub mod engine;
pub mod experience;
pub mod handlers;
pub mod keyword;
pub mod ranking;
pub mod skills;
pub mod weights;

pub use engine::{MatchBreakdown, MatchResult, MatchingEngine};
pub use ranking::{rank_candidates, RankCandidate, RankedCandidate, RankingReport};
pub use weights::MatchWeights;

/// Returned when the candidate side lacks the data a sub-score needs.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Returned when the job states no requirement for a sub-score.
pub const NO_REQUIREMENT_SCORE: f64 = 0.7;
