//! Error types for upstream calls.

use thiserror::Error;

/// Errors that can occur while talking to the flight data provider.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// No access key was resolved from the environment.
    #[error("AviationStack API key not configured")]
    MissingAccessKey,

    /// Network connectivity error (DNS, connection refused, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded deadline.
    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    /// Provider returned an error response (4xx, 5xx).
    #[error("Upstream error {status}: {body}")]
    Status { status: u16, body: String },

    /// Provider response body was not valid JSON.
    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),
}
