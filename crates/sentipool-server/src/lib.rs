//! Sentipool Server
//!
//! The thin web layer around the annotation core: resolves visitor
//! identity from cookies, serves sentence batches, and records votes
//! against the shared JSON-backed pool.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod visitor;

use config::ServerConfig;
use handlers::{create_router, AppState};
use sentipool_store::JsonFileStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the annotation HTTP server
///
/// Initializes tracing, wraps the sentence pool store in a shared lock,
/// and starts the axum server.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Sentipool server");
    info!("Bind address: {}", config.bind_addr());
    info!("Sentence pool: {}", config.data_file);
    info!(
        "Visitor cookie lifetime: {} seconds",
        config.visitor_cookie_max_age_secs
    );

    // Create application state
    let state = AppState {
        store: Arc::new(RwLock::new(JsonFileStore::new(config.data_file.clone()))),
        cookie_max_age_secs: config.visitor_cookie_max_age_secs,
    };

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config() {
        let config = ServerConfig::default_test_config();
        assert_eq!(config.bind_port, 8080);
        assert!(!config.data_file.is_empty());
    }
}
