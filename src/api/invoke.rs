//! Model invocation endpoint handler.

use crate::api::{ApiError, AppState};
use crate::dispatch::{ModelRequest, ModelResponse};
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::warn;

/// POST /invoke - Dispatch a model request over HTTP.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ModelRequest>,
) -> Result<Json<ModelResponse>, ApiError> {
    let model_id = request.model_id.clone();

    match state.dispatcher.dispatch(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            warn!(model_id = %model_id, error = %e, "Model dispatch failed");
            Err(e.into())
        }
    }
}
