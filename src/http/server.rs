//! HTTP server startup logic.

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid bind address: {0}")]
    Address(#[from] ConfigError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Start the HTTP server on `http.host:http.port`.
///
/// This function blocks until `handle` is shut down, either by the signal
/// handler or by the caller.
pub async fn start_server(app: Router, config: &AppConfig, handle: Handle) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
