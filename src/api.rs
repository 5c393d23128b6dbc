// src/api.rs
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

use crate::analyze::{Theme, THEMES};
use crate::context::RunContext;
use crate::pipeline::HeadlinePipeline;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<HeadlinePipeline>,
    /// Deadline applied to every pipeline run.
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(pipeline: Arc<HeadlinePipeline>, request_timeout: Duration) -> Self {
        Self {
            pipeline,
            request_timeout,
        }
    }
}

/// Public routes. `/metrics` is mounted only when a recorder handle is supplied.
pub fn router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/api/v1/headlines/raw", get(get_headlines))
        .route("/api/v1/themes", get(list_themes))
        .with_state(state);

    if let Some(handle) = metrics {
        app = app.merge(crate::metrics::router(handle));
    }

    app.layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

// `get` also answers HEAD.
async fn health() -> StatusCode {
    StatusCode::OK
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

async fn get_headlines(State(state): State<AppState>) -> Response {
    let ctx = RunContext::with_timeout(state.request_timeout);
    match state.pipeline.run(&ctx).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            error!(
                target: "api",
                kind = e.kind(),
                cancelled = e.is_cancellation(),
                error = %e,
                "failed to fetch headlines"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(Serialize)]
struct ThemesOut {
    data: Vec<&'static Theme>,
    count: usize,
}

async fn list_themes() -> Json<ThemesOut> {
    let mut data: Vec<&'static Theme> = THEMES.iter().collect();
    data.sort_by_key(|t| t.name);
    Json(ThemesOut {
        count: data.len(),
        data,
    })
}
