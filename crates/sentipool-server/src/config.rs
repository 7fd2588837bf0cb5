//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files including bind address, the sentence
//! pool document path, and the visitor cookie lifetime.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// Path to the sentence pool JSON document
    pub data_file: String,

    /// Visitor cookie lifetime in seconds (default: 31536000 = 1 year)
    #[serde(default = "default_cookie_max_age")]
    pub visitor_cookie_max_age_secs: u64,
}

/// Default visitor cookie lifetime: 1 year
fn default_cookie_max_age() -> u64 {
    365 * 24 * 60 * 60
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;

        // Validate required fields
        if config.data_file.is_empty() {
            return Err(ConfigError::MissingField("data_file".to_string()));
        }

        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            data_file: "combined_data.json".to_string(),
            visitor_cookie_max_age_secs: default_cookie_max_age(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
