use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::extraction::CvExtractor;
use crate::matching::engine::MatchingEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub extractor: Arc<CvExtractor>,
    /// Engine built with the configured weights. Requests carrying their own
    /// weights derive a sibling engine over the same catalog.
    pub engine: Arc<MatchingEngine>,
}

impl AppState {
    /// Loads the keyword catalog and builds the extractor and engine around it.
    pub fn from_config(config: Config) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let catalog = Catalog::from_json_file(path)
                    .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
                info!("Keyword catalog loaded from {}", path.display());
                catalog
            }
            None => Catalog::default(),
        };
        let catalog = Arc::new(catalog);

        let extractor = CvExtractor::new(Arc::clone(&catalog), config.reference_year);
        let engine = MatchingEngine::new(catalog, config.weights)
            .context("Failed to build matching engine")?;

        Ok(AppState {
            config,
            extractor: Arc::new(extractor),
            engine: Arc::new(engine),
        })
    }
}
