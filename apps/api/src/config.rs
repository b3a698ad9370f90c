use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::warn;

use crate::matching::ranking::DEFAULT_RANK_THRESHOLD;
use crate::matching::weights::MatchWeights;

/// Application configuration loaded from environment variables.
/// Every variable is optional; startup fails only on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub weights: MatchWeights,
    /// Year used to turn dated work history into years of experience.
    pub reference_year: i32,
    pub rank_threshold: f64,
    /// JSON file replacing the built-in keyword catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            weights: MatchWeights::default(),
            reference_year: chrono::Utc::now().year(),
            rank_threshold: DEFAULT_RANK_THRESHOLD,
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let weights = MatchWeights::new(
            parse_or(&lookup, "MATCH_WEIGHT_SKILLS", defaults.weights.skills)?,
            parse_or(&lookup, "MATCH_WEIGHT_EXPERIENCE", defaults.weights.experience)?,
            parse_or(&lookup, "MATCH_WEIGHT_EDUCATION", defaults.weights.education)?,
            parse_or(&lookup, "MATCH_WEIGHT_KEYWORD", defaults.weights.keyword)?,
        )
        .context("Invalid MATCH_WEIGHT_* configuration")?;

        if (weights.sum() - 1.0).abs() > 1e-6 {
            warn!(
                "Match weights sum to {:.3}; overall scores will be clamped to [0, 1]",
                weights.sum()
            );
        }

        let rank_threshold = parse_or(&lookup, "MATCH_RANK_THRESHOLD", defaults.rank_threshold)?;
        if !(0.0..=1.0).contains(&rank_threshold) {
            anyhow::bail!("MATCH_RANK_THRESHOLD must be between 0 and 1, got {rank_threshold}");
        }

        Ok(Config {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            weights,
            reference_year: parse_or(&lookup, "MATCH_REFERENCE_YEAR", defaults.reference_year)?,
            rank_threshold,
            catalog_path: lookup("MATCH_CATALOG_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}
