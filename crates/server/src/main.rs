//! holidays-api server entry point.
//!
//! Loads configuration, wires the cache, upstream client and festival
//! dataset into the router, and serves HTTP until Ctrl-C.
//! Logs are JSON on stderr.

use anyhow::Result;
use almanac_core::AppConfig;
use tracing_subscriber::EnvFilter;

mod error;
mod handler;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    let state = handler::AppState::from_config(&config)?;
    let app = handler::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        festivals_dir = %config.festivals_dir.display(),
        upstream = %config.holidays_base_url,
        "Starting holidays API server"
    );

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
