// src/metrics.rs
use axum::{routing::get, Router};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder once per process; later calls return the same handle.
pub fn install() -> Result<PrometheusHandle, BuildError> {
    HANDLE
        .get_or_try_init(|| PrometheusBuilder::new().install_recorder())
        .cloned()
}

/// `/metrics` in the Prometheus exposition format.
pub fn router<S>(handle: PrometheusHandle) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(
        "/metrics",
        get(move || {
            let h = handle.clone();
            async move { h.render() }
        }),
    )
}
