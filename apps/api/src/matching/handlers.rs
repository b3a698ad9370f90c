//! Axum route handlers for the Matching API.
//!
//! Records arrive fully formed from the CRUD layer; nothing is loaded or
//! stored here.

use std::sync::Arc;

use anyhow::Context;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::ExtractedCvData;
use crate::matching::engine::{MatchResult, MatchingEngine};
use crate::matching::ranking::{rank_candidates, RankCandidate, RankingReport};
use crate::matching::weights::MatchWeights;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ProcessCvRequest {
    pub cv_text: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessCvResponse {
    pub processed_data: ExtractedCvData,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub candidate: CandidateProfile,
    pub job: JobRecord,
    /// Overrides the configured weights for this request only.
    #[serde(default)]
    pub weights: Option<MatchWeights>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matching_score: f64,
}

#[derive(Debug, Serialize)]
pub struct DetailedMatchResponse {
    pub match_details: MatchResult,
}

#[derive(Debug, Deserialize)]
pub struct BatchPair {
    pub id: Value,
    pub candidate: CandidateProfile,
    pub job: JobRecord,
}

#[derive(Debug, Deserialize)]
pub struct BatchMatchRequest {
    pub pairs: Vec<BatchPair>,
}

#[derive(Debug, Serialize)]
pub struct BatchMatchResult {
    pub id: Value,
    pub matching_score: f64,
}

#[derive(Debug, Serialize)]
pub struct BatchMatchResponse {
    pub results: Vec<BatchMatchResult>,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub job: JobRecord,
    pub candidates: Vec<RankCandidate>,
    #[serde(default)]
    pub threshold: Option<f64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matching/process-cv
///
/// Extracts structured candidate fields from raw CV text.
pub async fn handle_process_cv(
    State(state): State<AppState>,
    Json(request): Json<ProcessCvRequest>,
) -> Result<Json<ProcessCvResponse>, AppError> {
    if request.cv_text.trim().is_empty() {
        return Err(AppError::Validation("cv_text cannot be empty".to_string()));
    }

    let processed_data = state.extractor.extract(&request.cv_text);

    Ok(Json(ProcessCvResponse {
        processed_data,
        message: "CV processed successfully".to_string(),
    }))
}

/// POST /api/v1/matching/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let engine = engine_for(&state, request.weights)?;
    let matching_score = engine.calculate_matching_score(&request.candidate, &request.job);

    Ok(Json(MatchResponse { matching_score }))
}

/// POST /api/v1/matching/match/detailed
///
/// Same score as `/match` plus the per-factor breakdown and weights used.
pub async fn handle_match_detailed(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<DetailedMatchResponse>, AppError> {
    let engine = engine_for(&state, request.weights)?;
    let match_details = engine.match_details(&request.candidate, &request.job);

    Ok(Json(DetailedMatchResponse { match_details }))
}

/// POST /api/v1/matching/match/batch
///
/// Scores independent candidate/job pairs, preserving request order.
pub async fn handle_match_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchMatchRequest>,
) -> Result<Json<BatchMatchResponse>, AppError> {
    let engine = Arc::clone(&state.engine);
    let pair_count = request.pairs.len();

    let results = tokio::task::spawn_blocking(move || {
        request
            .pairs
            .into_iter()
            .map(|pair| BatchMatchResult {
                matching_score: engine.calculate_matching_score(&pair.candidate, &pair.job),
                id: pair.id,
            })
            .collect::<Vec<_>>()
    })
    .await
    .context("batch scoring task failed")?;

    info!("Scored {pair_count} candidate/job pairs");
    Ok(Json(BatchMatchResponse { results }))
}

/// POST /api/v1/matching/rank
///
/// Ranks candidates for one job, best first, dropping those below the
/// threshold (configured default when the request omits it).
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankingReport>, AppError> {
    let threshold = request.threshold.unwrap_or(state.config.rank_threshold);
    if !(0.0..=1.0).contains(&threshold) {
        return Err(AppError::Validation(format!(
            "threshold must be between 0 and 1, got {threshold}"
        )));
    }

    let engine = Arc::clone(&state.engine);
    let report = tokio::task::spawn_blocking(move || {
        rank_candidates(&engine, &request.job, &request.candidates, threshold)
    })
    .await
    .context("ranking task failed")?;

    info!(
        "Ranked {} candidates, {} at or above {threshold}",
        report.total_candidates, report.qualified_candidates
    );
    Ok(Json(report))
}

fn engine_for(
    state: &AppState,
    weights: Option<MatchWeights>,
) -> Result<MatchingEngine, AppError> {
    match weights {
        Some(weights) => Ok(state.engine.with_weights(weights)?),
        None => Ok(state.engine.as_ref().clone()),
    }
}
