use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// Candidate record as handed over by the CRUD layer.
///
/// Every field is optional on the wire: partial payloads, missing fields and
/// explicit nulls deserialize to `None` / empty and score with the neutral
/// fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_profile: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    pub total_experience_years: Option<f64>,
    pub education: Option<String>,
    pub parsed_cv_text: Option<String>,
}

impl CandidateProfile {
    /// "First Last", skipping whichever half is missing.
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
