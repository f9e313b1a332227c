//! hello-service entry point.
//!
//! Parses CLI arguments, loads configuration, initializes tracing, builds the
//! Axum router and serves it until a shutdown signal arrives.

use std::path::PathBuf;
use std::time::Duration;

use axum_server::Handle;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_service::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use hello_service::create_router;
use hello_service::http::{shutdown, start_server};

/// hello-service: greeting and health-check HTTP endpoints
#[derive(Parser, Debug)]
#[command(name = "hello-service", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "hello_service=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override http.host
    #[arg(long)]
    host: Option<String>,

    /// Override http.port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = AppConfig::load_or_default(args.config.as_ref())?;
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }
    config.validate()?;

    // Priority: CLI > env > config > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .or_else(|| config.logging.filter.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let json = config.logging.format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        format = ?config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(config.http.shutdown_timeout_seconds),
    );

    start_server(app, &config, handle).await?;

    Ok(())
}
