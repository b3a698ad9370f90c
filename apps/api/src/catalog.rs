//! Keyword catalogs shared by the CV extractor and the matching engine.
//!
//! Everything here is plain data: the built-in tables below seed
//! `Catalog::default()`, and a JSON file with the same shape can replace them
//! at startup (`MATCH_CATALOG_PATH`). A catalog is immutable once built and is
//! shared behind an `Arc`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::MatchConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Language,
    Framework,
    Database,
    CloudDevops,
    Practice,
}

/// A skill the extractor recognises in free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTerm {
    pub term: String,
    pub category: SkillCategory,
}

/// Education levels, ordered. The discriminant is the rank used for comparison.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    #[default]
    Unspecified = 0,
    Certificate = 1,
    Associate = 2,
    Bachelor = 3,
    Master = 4,
    Doctorate = 5,
}

impl EducationLevel {
    pub fn rank(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationTerm {
    pub term: String,
    pub level: EducationLevel,
}

/// Seniority words that imply a years-of-experience requirement when a job
/// states no explicit number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeniorityLevel {
    pub terms: Vec<String>,
    pub years: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Skills pulled out of CV text by substring containment.
    pub cv_skills: Vec<SkillTerm>,
    /// Keywords counted as job requirements by the skills sub-score.
    pub technical_keywords: Vec<String>,
    /// Synonym → level table for the education hierarchy.
    pub education_levels: Vec<EducationTerm>,
    /// Words that mark a CV line as education-related.
    pub education_keywords: Vec<String>,
    /// Checked in order; the first level with a matching term wins.
    pub seniority_levels: Vec<SeniorityLevel>,
}

const CV_SKILLS: &[(&str, SkillCategory)] = &[
    ("python", SkillCategory::Language),
    ("java", SkillCategory::Language),
    ("javascript", SkillCategory::Language),
    ("typescript", SkillCategory::Language),
    ("c++", SkillCategory::Language),
    ("c#", SkillCategory::Language),
    ("php", SkillCategory::Language),
    ("ruby", SkillCategory::Language),
    ("go", SkillCategory::Language),
    ("rust", SkillCategory::Language),
    ("swift", SkillCategory::Language),
    ("kotlin", SkillCategory::Language),
    ("scala", SkillCategory::Language),
    ("r", SkillCategory::Language),
    ("matlab", SkillCategory::Language),
    ("sql", SkillCategory::Language),
    ("html", SkillCategory::Language),
    ("css", SkillCategory::Language),
    ("react", SkillCategory::Framework),
    ("angular", SkillCategory::Framework),
    ("vue", SkillCategory::Framework),
    ("django", SkillCategory::Framework),
    ("flask", SkillCategory::Framework),
    ("spring", SkillCategory::Framework),
    ("express", SkillCategory::Framework),
    ("node.js", SkillCategory::Framework),
    ("laravel", SkillCategory::Framework),
    ("rails", SkillCategory::Framework),
    ("asp.net", SkillCategory::Framework),
    ("jquery", SkillCategory::Framework),
    ("bootstrap", SkillCategory::Framework),
    ("tensorflow", SkillCategory::Framework),
    ("pytorch", SkillCategory::Framework),
    ("pandas", SkillCategory::Framework),
    ("numpy", SkillCategory::Framework),
    ("mysql", SkillCategory::Database),
    ("postgresql", SkillCategory::Database),
    ("mongodb", SkillCategory::Database),
    ("redis", SkillCategory::Database),
    ("elasticsearch", SkillCategory::Database),
    ("oracle", SkillCategory::Database),
    ("sqlite", SkillCategory::Database),
    ("aws", SkillCategory::CloudDevops),
    ("azure", SkillCategory::CloudDevops),
    ("gcp", SkillCategory::CloudDevops),
    ("docker", SkillCategory::CloudDevops),
    ("kubernetes", SkillCategory::CloudDevops),
    ("jenkins", SkillCategory::CloudDevops),
    ("git", SkillCategory::CloudDevops),
    ("gitlab", SkillCategory::CloudDevops),
    ("github", SkillCategory::CloudDevops),
    ("terraform", SkillCategory::CloudDevops),
    ("ansible", SkillCategory::CloudDevops),
    ("linux", SkillCategory::CloudDevops),
    ("unix", SkillCategory::CloudDevops),
    ("machine learning", SkillCategory::Practice),
    ("artificial intelligence", SkillCategory::Practice),
    ("data science", SkillCategory::Practice),
    ("big data", SkillCategory::Practice),
    ("blockchain", SkillCategory::Practice),
    ("cybersecurity", SkillCategory::Practice),
    ("network security", SkillCategory::Practice),
    ("project management", SkillCategory::Practice),
    ("agile", SkillCategory::Practice),
    ("scrum", SkillCategory::Practice),
    ("devops", SkillCategory::Practice),
];

const TECHNICAL_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "angular",
    "vue",
    "django",
    "flask",
    "spring",
    "node.js",
    "mysql",
    "postgresql",
    "mongodb",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "machine learning",
    "data science",
    "ai",
    "sql",
    "html",
    "css",
];

const EDUCATION_LEVELS: &[(&str, EducationLevel)] = &[
    ("phd", EducationLevel::Doctorate),
    ("doctorate", EducationLevel::Doctorate),
    ("ph.d.", EducationLevel::Doctorate),
    ("master", EducationLevel::Master),
    ("mba", EducationLevel::Master),
    ("m.s.", EducationLevel::Master),
    ("m.a.", EducationLevel::Master),
    ("bachelor", EducationLevel::Bachelor),
    ("b.s.", EducationLevel::Bachelor),
    ("b.a.", EducationLevel::Bachelor),
    ("associate", EducationLevel::Associate),
    ("diploma", EducationLevel::Certificate),
    ("certificate", EducationLevel::Certificate),
];

const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "mba",
    "degree",
    "university",
    "college",
    "institute",
    "school",
    "b.s.",
    "b.a.",
    "m.s.",
    "m.a.",
    "ph.d.",
];

const SENIORITY_LEVELS: &[(&[&str], f64)] = &[
    (&["entry", "junior", "graduate"], 1.0),
    (&["mid", "intermediate"], 4.0),
    (&["senior", "lead"], 8.0),
    (&["principal", "architect"], 12.0),
];

impl Default for Catalog {
    fn default() -> Self {
        Self {
            cv_skills: CV_SKILLS
                .iter()
                .map(|&(term, category)| SkillTerm {
                    term: term.to_string(),
                    category,
                })
                .collect(),
            technical_keywords: TECHNICAL_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            education_levels: EDUCATION_LEVELS
                .iter()
                .map(|&(term, level)| EducationTerm {
                    term: term.to_string(),
                    level,
                })
                .collect(),
            education_keywords: EDUCATION_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            seniority_levels: SENIORITY_LEVELS
                .iter()
                .map(|&(terms, years)| SeniorityLevel {
                    terms: terms.iter().map(|s| s.to_string()).collect(),
                    years,
                })
                .collect(),
        }
    }
}

impl Catalog {
    /// Loads a catalog from a JSON file. Sections missing from the file keep
    /// their built-in tables; every term is lowercased on load.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, MatchConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| MatchConfigError::CatalogRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, MatchConfigError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.normalized()
    }

    fn normalized(mut self) -> Result<Self, MatchConfigError> {
        for skill in &mut self.cv_skills {
            skill.term = normalize_term(&skill.term, "cv_skills")?;
        }
        for keyword in &mut self.technical_keywords {
            *keyword = normalize_term(keyword, "technical_keywords")?;
        }
        for edu in &mut self.education_levels {
            edu.term = normalize_term(&edu.term, "education_levels")?;
        }
        for keyword in &mut self.education_keywords {
            *keyword = normalize_term(keyword, "education_keywords")?;
        }
        for level in &mut self.seniority_levels {
            if !level.years.is_finite() || level.years < 0.0 {
                return Err(MatchConfigError::InvalidSeniorityYears { value: level.years });
            }
            for term in &mut level.terms {
                *term = normalize_term(term, "seniority_levels")?;
            }
        }
        Ok(self)
    }

    /// Highest education level whose synonym occurs anywhere in `text`.
    pub fn highest_education_level(&self, text: &str) -> EducationLevel {
        let lower = text.to_lowercase();
        self.education_levels
            .iter()
            .filter(|edu| lower.contains(edu.term.as_str()))
            .map(|edu| edu.level)
            .max()
            .unwrap_or_default()
    }

    /// Years implied by the first seniority level mentioned in `text`.
    pub fn implied_seniority_years(&self, text: &str) -> Option<f64> {
        let lower = text.to_lowercase();
        self.seniority_levels
            .iter()
            .find(|level| level.terms.iter().any(|t| lower.contains(t.as_str())))
            .map(|level| level.years)
    }
}

fn normalize_term(term: &str, section: &'static str) -> Result<String, MatchConfigError> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return Err(MatchConfigError::EmptyCatalogTerm { section });
    }
    Ok(trimmed.to_lowercase())
}
