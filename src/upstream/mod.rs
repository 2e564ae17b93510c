//! HTTP client for the AviationStack flight data API.
//!
//! A single resource is used: `GET /flights`, authenticated by an access
//! key sent as a query parameter. Responses are returned as raw JSON; the
//! [`crate::flights`] module owns reshaping.

pub mod error;

pub use error::UpstreamError;

use crate::config::UpstreamConfig;
use serde_json::Value;
use std::time::Duration;

/// Client for the AviationStack REST API.
///
/// Holds the connection pool, the endpoint base URL, and the access key
/// resolved from the environment at construction time. Cloning is cheap;
/// clones share the underlying pool.
#[derive(Debug, Clone)]
pub struct AviationClient {
    client: reqwest::Client,
    base_url: String,
    access_key: Option<String>,
    timeout: Duration,
}

impl AviationClient {
    /// Build a client from configuration, resolving the access key from the
    /// environment variable named in `config.access_key_env`.
    pub fn new(config: &UpstreamConfig) -> Self {
        let access_key = std::env::var(&config.access_key_env)
            .ok()
            .filter(|key| !key.is_empty());

        Self::from_parts(
            config.base_url.clone(),
            access_key,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    /// Build a client from explicit parts, bypassing the environment.
    pub fn from_parts(
        base_url: impl Into<String>,
        access_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            access_key,
            timeout,
        }
    }

    /// Whether an access key was resolved at construction.
    pub fn has_access_key(&self) -> bool {
        self.access_key.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch raw flight data for a flight IATA code.
    ///
    /// Returns the provider payload untouched. Fails before any network
    /// call if no access key is configured.
    pub async fn fetch_flights(&self, flight_iata: &str) -> Result<Value, UpstreamError> {
        let access_key = self
            .access_key
            .as_deref()
            .ok_or(UpstreamError::MissingAccessKey)?;

        let url = format!("{}/flights", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("access_key", access_key), ("flight_iata", flight_iata)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    UpstreamError::Timeout(self.timeout.as_millis() as u64)
                } else {
                    UpstreamError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))
    }
}
