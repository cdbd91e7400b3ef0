//! On-Demand Photo Gallery Server
//!
//! A Rust-based server that:
//! - Walks a photo directory and builds a browsable gallery index
//! - Generates thumbnails per request instead of precomputing them
//! - Corrects EXIF rotation for the four 90-degree orientations
//! - Runs as a systemd service with graceful shutdown

mod config;
mod gallery;
mod image_proc;
mod web;

use clap::Parser;
use config::Config;
use std::path::PathBuf;
use tokio::sync::broadcast;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "photo-thumb-gallery")]
#[command(about = "On-demand thumbnail gallery server")]
#[command(version)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: String,

    /// Web server port (overrides config, default: 3030)
    #[arg(long = "http-port")]
    http_port: Option<u16>,

    /// Gallery root directory (overrides config)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Using current_thread runtime for single-core boards
/// This reduces memory overhead and avoids thread synchronization costs
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose);

    tracing::info!("Starting photo gallery server");

    // Load configuration
    let mut config = Config::load(&args.config).unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from {}: {}", args.config, e);
        tracing::info!("Using default configuration");
        Config::default()
    });

    // Apply command line overrides, then validate the effective config.
    // Validation runs after the overrides so --root can repair a config
    // file whose stored gallery root no longer exists.
    if let Some(port) = args.http_port {
        config.port = port;
    }
    if let Some(root) = args.root {
        config.gallery_root = root;
    }
    config.validate()?;

    tracing::info!(
        "Serving {} (suffix {:?}) on {}:{}",
        config.gallery_root.display(),
        config.suffix,
        config.host,
        config.port
    );

    // Setup shutdown signal handling
    let (shutdown_tx, _) = broadcast::channel::<()>(1);

    // Spawn web server task
    let web_server = web::WebServer::new(config);
    let web_shutdown = shutdown_tx.subscribe();
    let web_handle = tokio::spawn(async move {
        if let Err(e) = web_server.run_with_shutdown(web_shutdown).await {
            tracing::error!("Web server error: {}", e);
        }
    });

    // Wait for shutdown signal
    wait_for_shutdown().await;
    tracing::info!("Shutdown signal received");

    // Send shutdown to the server task
    let _ = shutdown_tx.send(());

    // Wait for the server to drain with timeout
    tokio::select! {
        _ = web_handle => {},
        _ = tokio::time::sleep(std::time::Duration::from_secs(5)) => {
            tracing::warn!("Web server shutdown timeout");
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
///
/// Default level is "warn" to minimize SD card wear from log writes.
/// Use --verbose flag for "debug" level during development/troubleshooting.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("photo_thumb_gallery={}", level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

/// Wait for shutdown signals (SIGTERM, SIGINT)
async fn wait_for_shutdown() {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to setup SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to setup SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => {
            tracing::info!("Received SIGTERM");
        }
        _ = sigint.recv() => {
            tracing::info!("Received SIGINT");
        }
    }
}
