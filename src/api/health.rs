//! Health check endpoint handler.

use crate::api::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub api_key_configured: bool,
    pub uptime_seconds: u64,
    pub active_connections: usize,
}

/// GET /health - Report gateway liveness and upstream credential state.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        api_key_configured: state.upstream.has_access_key(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        active_connections: state.connections.active_count(),
    })
}
