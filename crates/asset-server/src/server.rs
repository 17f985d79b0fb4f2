//! Router construction and the serve loop.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Static files only; directory requests resolve to their `index.html`.
pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(&config.asset_dir))
        .layer(TraceLayer::new_for_http())
}

/// Bind, announce the port and serve until `shutdown` resolves.
pub async fn serve<F>(config: &ServerConfig, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    config.validate()?;

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let port = listener.local_addr()?.port();

    info!(
        port,
        asset_dir = %config.asset_dir.display(),
        "Server listening on port: {}",
        port
    );

    axum::serve(listener, build_router(config))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}
