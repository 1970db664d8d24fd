//! Application state for the extraction server

use std::sync::Arc;

use crate::config::AppConfig;
use crate::ingestion::ExtractionPipeline;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: AppConfig,
    /// Extraction pipeline
    pipeline: ExtractionPipeline,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Self {
        let pipeline = ExtractionPipeline::new(config.ingest.clone());
        Self {
            inner: Arc::new(AppStateInner { config, pipeline }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get the extraction pipeline
    pub fn pipeline(&self) -> &ExtractionPipeline {
        &self.inner.pipeline
    }
}
