//! HTTP server initialization and runtime setup.
//!
//! Handles probe selection, state wiring and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::probe::ImageProbe;
use crate::infrastructure::probe::{HttpImageProbe, OfflineProbe};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Image probe (HTTP or offline)
/// - Application services
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let probe = build_probe(&config)?;
    tracing::info!("Image probe: {}", probe.name());

    let state = AppState::new(probe, config.thumbnail_cdn.clone());

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Picks the probe implementation from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn build_probe(config: &Config) -> Result<Arc<dyn ImageProbe>> {
    if config.probe_enabled {
        let probe = HttpImageProbe::new(config.probe_timeout())
            .context("Failed to build HTTP client for image probe")?;
        Ok(Arc::new(probe))
    } else {
        Ok(Arc::new(OfflineProbe::new()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
