use thiserror::Error;

use crate::upstream::UpstreamError;

/// Errors produced while routing and executing a model request.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The request body was well-formed JSON but failed model-specific checks.
    #[error("{0}")]
    Validation(String),

    /// No model is registered under the requested id.
    #[error("Unknown model_id: {0}")]
    UnknownModel(String),

    /// The upstream provider call failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = DispatchError::Validation("Flight IATA code is required".to_string());
        assert_eq!(err.to_string(), "Flight IATA code is required");
    }

    #[test]
    fn test_unknown_model_names_the_id() {
        let err = DispatchError::UnknownModel("weather-oracle".to_string());
        assert_eq!(err.to_string(), "Unknown model_id: weather-oracle");
    }

    #[test]
    fn test_upstream_error_passes_through() {
        let err = DispatchError::from(UpstreamError::MissingAccessKey);
        assert_eq!(err.to_string(), "AviationStack API key not configured");
    }
}
