// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Transcript Server
//!
//! Serves a single page where users paste a YouTube link and get the
//! video's transcript back, with a copy saved on the server.

use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transcript_server::{
    config::Config,
    services::{TranscriptService, TranscriptStore, YoutubeClient},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()
        .inspect_err(|e| tracing::error!(error = %e, "Failed to load configuration"))
        .context("loading configuration")?;
    tracing::info!(port = config.port, "Starting transcript server");

    let client = YoutubeClient::new(
        &config.youtube_base_url,
        Duration::from_secs(config.http_timeout_secs),
    )
    .context("building YouTube HTTP client")?;
    let transcript_service = TranscriptService::new(
        client,
        config.preferred_languages.clone(),
        config.cache_ttl_secs,
    );
    tracing::info!(
        languages = ?config.preferred_languages,
        cache_ttl_secs = config.cache_ttl_secs,
        "Transcript service initialized"
    );

    let store = TranscriptStore::new(&config.save_dir);
    tracing::info!(dir = %store.dir().display(), "Transcripts will be saved locally");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        transcript_service,
        store,
    });

    // Build router
    let app = transcript_server::routes::create_router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .inspect_err(|e| tracing::error!(address = %addr, error = %e, "Failed to bind"))
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("transcript_server=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}

/// Resolve on Ctrl+C or SIGTERM (what `docker stop` sends).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
