//! Configuration module for Skybridge
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`SKYBRIDGE_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use skybridge::config::GatewayConfig;
//!
//! // Load defaults
//! let config = GatewayConfig::default();
//! assert_eq!(config.server.port, 8000);
//!
//! // Parse from TOML
//! let toml = r#"
//! [server]
//! port = 9000
//! "#;
//! let config: GatewayConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.server.port, 9000);
//! ```

pub mod error;
pub mod logging;
pub mod server;
pub mod upstream;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the Skybridge gateway.
///
/// Aggregates the HTTP server settings, the upstream provider settings,
/// and logging.
///
/// # Example
///
/// ```rust
/// use skybridge::config::GatewayConfig;
///
/// let config = GatewayConfig::default();
/// assert_eq!(config.server.host, "0.0.0.0");
/// assert_eq!(config.upstream.base_url, "http://api.aviationstack.com/v1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Upstream flight data provider settings
    pub upstream: UpstreamConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports SKYBRIDGE_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        // Server settings
        if let Ok(port) = std::env::var("SKYBRIDGE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("SKYBRIDGE_HOST") {
            self.server.host = host;
        }

        // Logging settings
        if let Ok(level) = std::env::var("SKYBRIDGE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SKYBRIDGE_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        // Upstream settings
        if let Ok(url) = std::env::var("SKYBRIDGE_UPSTREAM_URL") {
            self.upstream.base_url = url;
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }

        if self.upstream.base_url.is_empty() {
            return Err(ConfigError::Validation {
                field: "upstream.base_url".to_string(),
                message: "base URL cannot be empty".to_string(),
            });
        }

        if self.upstream.access_key_env.is_empty() {
            return Err(ConfigError::Validation {
                field: "upstream.access_key_env".to_string(),
                message: "environment variable name cannot be empty".to_string(),
            });
        }

        if self.upstream.timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "upstream.timeout_seconds".to_string(),
                message: "timeout must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}
