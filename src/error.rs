// src/error.rs
//! Error kinds surfaced by configuration loading, the news source and the pipeline.

use std::path::PathBuf;

/// Fatal startup problems. The binary exits before serving on any of these.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("NEWSDATA_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("invalid {var} value '{value}': expected {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("reading config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Upstream failures while talking to the news provider. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to fetch from NewsData.io: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("NewsData.io returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("NewsData.io returned status: {0}")]
    ApiStatus(String),

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid NewsData.io base url '{0}'")]
    InvalidUrl(String),
}

/// The caller gave up: explicit cancellation or an expired deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CancellationError {
    #[error("context canceled")]
    Cancelled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Everything a pipeline run can fail with.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Cancelled(#[from] CancellationError),
}

impl PipelineError {
    pub fn is_cancellation(&self) -> bool {
        matches!(self, PipelineError::Cancelled(_))
    }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Fetch(FetchError::Transport(_)) => "transport",
            PipelineError::Fetch(FetchError::Status { .. }) => "http_status",
            PipelineError::Fetch(FetchError::ApiStatus(_)) => "api_status",
            PipelineError::Fetch(FetchError::Decode(_)) => "decode",
            PipelineError::Fetch(FetchError::InvalidUrl(_)) => "invalid_url",
            PipelineError::Cancelled(CancellationError::Cancelled) => "cancelled",
            PipelineError::Cancelled(CancellationError::DeadlineExceeded) => "deadline",
        }
    }
}
