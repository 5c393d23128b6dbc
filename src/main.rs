//! Mindful headlines service — binary entrypoint.
//! Loads config, installs tracing + metrics, and serves the Axum router.

use std::net::SocketAddr;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mindful_headlines::{app, metrics, ServiceConfig};

const DEFAULT_LOG_FILTER: &str =
    "mindful_headlines=info,pipeline=info,api=info,newsdata=info,tower_http=info,warn";

/// JSON logs when LOG_FORMAT=json, compact otherwise. RUST_LOG overrides the filter.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

async fn serve(cfg: ServiceConfig) -> anyhow::Result<()> {
    let handle = match metrics::install() {
        Ok(h) => Some(h),
        Err(e) => {
            warn!(error = %e, "prometheus recorder not installed; /metrics disabled");
            None
        }
    };

    let router = app(&cfg, handle).context("building news source client")?;

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(port = cfg.port, "service starting");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = match ServiceConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match serve(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "failed to start server");
            ExitCode::FAILURE
        }
    }
}
