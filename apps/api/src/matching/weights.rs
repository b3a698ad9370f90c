use serde::{Deserialize, Serialize};

use crate::errors::MatchConfigError;
use crate::matching::engine::MatchBreakdown;

/// Relative weight of each sub-score in the overall match.
///
/// Weights need not sum to 1; the weighted sum is clamped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keyword: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.4,
            experience: 0.25,
            education: 0.15,
            keyword: 0.2,
        }
    }
}

impl MatchWeights {
    pub fn new(
        skills: f64,
        experience: f64,
        education: f64,
        keyword: f64,
    ) -> Result<Self, MatchConfigError> {
        let weights = Self {
            skills,
            experience,
            education,
            keyword,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Rejects negative, NaN and infinite weights.
    pub fn validate(&self) -> Result<(), MatchConfigError> {
        for (name, value) in [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("keyword", self.keyword),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchConfigError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }

    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.keyword
    }

    /// Weighted sum of the sub-scores, clamped to [0, 1].
    pub fn combine(&self, scores: &MatchBreakdown) -> f64 {
        (self.skills * scores.skills_match
            + self.experience * scores.experience_match
            + self.education * scores.education_match
            + self.keyword * scores.keyword_match)
            .clamp(0.0, 1.0)
    }
}
