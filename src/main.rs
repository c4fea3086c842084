mod config;
mod error;
mod gemini;
mod handlers;
mod identity;
mod metrics;
mod models;
mod rate_limit;
mod state;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Args, LogFormat};
use crate::gemini::GeminiClient;
use crate::rate_limit::{AdmissionLimits, RequestHistoryStore, idle_sweeper};
use crate::state::AppState;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // parse cli arguments
    let args = Args::parse();
    init_tracing(args.log_format);

    let generator = GeminiClient::new(
        &args.gemini_url,
        &args.gemini_model,
        &args.gemini_api_key,
        Duration::from_secs(args.request_timeout),
    )
    .context("failed to build Gemini client")?;

    let limits = AdmissionLimits::default();
    let history = Arc::new(RequestHistoryStore::new(limits));
    let state = Arc::new(AppState::new(Arc::new(generator), history.clone()));

    // spawn the idle client sweeper
    tokio::spawn(idle_sweeper(history, Duration::from_secs(args.sweep_interval)));

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, model = %args.gemini_model, "chatty gateway listening");
    tracing::info!(
        burst_limit = limits.burst_limit,
        daily_limit = limits.daily_limit,
        "admission limits per client"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("chatty gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
