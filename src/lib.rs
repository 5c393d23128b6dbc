// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod analyze;
pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod ingest;
pub mod lexicon;
pub mod metrics;
pub mod pipeline;
pub mod sentiment;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::config::ServiceConfig;
pub use crate::context::{CancelHandle, RunContext};
pub use crate::error::{CancellationError, ConfigError, FetchError, PipelineError};
pub use crate::ingest::{NewsDataProvider, NewsSource, RawArticle};
pub use crate::pipeline::{EnrichedHeadline, HeadlinePipeline, HeadlinesResult};

use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tracing::info;

/// Wire the NewsData.io provider, pipeline and routes from a loaded config.
pub fn app(cfg: &ServiceConfig, metrics: Option<PrometheusHandle>) -> Result<Router, FetchError> {
    let provider = NewsDataProvider::new(cfg.api_key.clone(), cfg.base_url.clone())?;
    // Safe diagnostics: never the key itself
    info!(
        base_url = %cfg.base_url,
        key_len = cfg.api_key.len(),
        timeout_secs = cfg.request_timeout.as_secs(),
        "news source configured"
    );
    let pipeline = Arc::new(HeadlinePipeline::new(Arc::new(provider)));
    Ok(router(AppState::new(pipeline, cfg.request_timeout), metrics))
}
