//! API error envelope.
//!
//! Every failing endpoint answers with `{"error": "<message>"}` and an HTTP
//! status derived from the failure class. WebSocket error frames reuse the
//! same single-key shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::dispatch::DispatchError;
use crate::upstream::UpstreamError;

/// An API-level failure: HTTP status plus a client-facing message.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Create a bad request error (400).
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Create a not found error (404).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// Create an internal server error (500).
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// Create a bad gateway error (502).
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            // A missing credential is the operator's problem, not the provider's.
            UpstreamError::MissingAccessKey => Self::internal(err.to_string()),
            other => Self::bad_gateway(format!("Error fetching flight data: {}", other)),
        }
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Validation(message) => Self::bad_request(message),
            DispatchError::UnknownModel(_) => Self::not_found(err.to_string()),
            DispatchError::Upstream(upstream) => Self::from(upstream),
        }
    }
}
