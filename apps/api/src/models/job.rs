use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub currency: Option<String>,
}

/// Job posting fields relevant to matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub requirements: String,
    pub salary_range: Option<SalaryRange>,
}

impl JobRecord {
    /// Requirements followed by description, separated by a single space.
    /// This is the only text body the matching engine looks at.
    pub fn match_text(&self) -> String {
        format!("{} {}", self.requirements, self.description)
    }
}
