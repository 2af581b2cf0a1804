//! HTTP server initialization and runtime setup.
//!
//! Builds the registry and shared state, then runs the Axum server until Ctrl-C.

use crate::application::services::{DynCodeGenerator, UrlRegistry};
use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// The registry lives exactly as long as this call; its contents are lost on
/// shutdown.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let generator: DynCodeGenerator = Box::new(RandomCodeGenerator::new(config.code_length));
    let registry = Arc::new(UrlRegistry::with_generator(
        generator,
        config.max_code_attempts,
    ));
    tracing::info!(
        code_length = config.code_length,
        max_attempts = config.max_code_attempts,
        "URL registry initialized"
    );

    let state = AppState::new(registry, &config.base_url);
    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
