//! Web server module for the gallery.
//!
//! Provides an HTTP server using Axum: an index page listing every image
//! and a catch-all image route that serves thumbnails or raw files.

pub mod routes;
pub mod templates;

use crate::config::Config;
use axum::{Router, routing::get};
use routes::AppState;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

/// Web server errors
#[derive(Error, Debug)]
pub enum WebError {
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),

    #[error("Server error: {0}")]
    ServerError(String),
}

/// Web server configuration
pub struct WebServer {
    config: Arc<Config>,
}

impl WebServer {
    /// Create a new web server
    ///
    /// The configuration is frozen here; nothing mutates it for the
    /// lifetime of the server, so request handlers share it lock-free.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Build the router with all routes
    fn build_router(&self) -> Router {
        let state = AppState {
            config: Arc::clone(&self.config),
        };

        Router::new()
            .route("/", get(routes::index))
            .route("/health", get(routes::health))
            .route("/{*path}", get(routes::image))
            .with_state(state)
    }

    /// Run the web server with graceful shutdown
    pub async fn run_with_shutdown(
        &self,
        shutdown: tokio::sync::broadcast::Receiver<()>,
    ) -> Result<(), WebError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Web server listening on http://{}", addr);

        let mut shutdown = shutdown;
        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Web server shutting down gracefully");
            })
            .await
            .map_err(|e| WebError::ServerError(e.to_string()))
    }
}
