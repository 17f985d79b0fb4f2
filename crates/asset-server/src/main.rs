//! Asset server entry point.

use anyhow::{Context, Result};
use tracing::info;

use asset_server::{serve, ServerConfig};
use intake_telemetry::{init_tracing, LogSink, TelemetryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let telemetry = TelemetryConfig::from_env("asset-server");
    init_tracing(&telemetry, LogSink::Stdout).context("Failed to initialize logging")?;

    let config = ServerConfig::from_env();

    serve(&config, shutdown_signal())
        .await
        .with_context(|| format!("Asset server failed on port {}", config.port))?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => {
            tracing::warn!(error = %e, "Cannot listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
