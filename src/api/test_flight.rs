//! Raw flight lookup endpoint handler.

use crate::api::{ApiError, AppState};
use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// Request body for the raw flight lookup.
#[derive(Debug, Deserialize)]
pub struct FlightLookupRequest {
    pub flight_iata: String,
}

/// POST /test-flight - Return the provider payload without reshaping.
///
/// Debugging aid: the response is AviationStack's JSON verbatim, pagination
/// and all.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FlightLookupRequest>,
) -> Result<Json<Value>, ApiError> {
    match state.upstream.fetch_flights(&request.flight_iata).await {
        Ok(payload) => Ok(Json(payload)),
        Err(e) => {
            warn!(flight_iata = %request.flight_iata, error = %e, "Flight lookup failed");
            Err(e.into())
        }
    }
}
