//! # Gateway HTTP surface
//!
//! HTTP and WebSocket endpoints for the Skybridge flight-data gateway.
//!
//! ## Endpoints
//!
//! - `GET /` - Service banner
//! - `GET /health` - Gateway liveness and upstream credential state
//! - `GET /models` - Catalog of dispatchable models
//! - `POST /invoke` - Dispatch a model request
//! - `POST /test-flight` - Raw provider passthrough for debugging
//! - `GET /ws` - WebSocket model dispatch
//!
//! ## Example
//!
//! ```no_run
//! use skybridge::api::{create_router, AppState};
//! use skybridge::config::GatewayConfig;
//! use skybridge::upstream::AviationClient;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GatewayConfig::default();
//! let upstream = AviationClient::new(&config.upstream);
//! let state = Arc::new(AppState::new(config, upstream));
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All failures share one envelope, over HTTP and WebSocket alike:
//! ```json
//! {
//!   "error": "Unknown model_id: weather-oracle"
//! }
//! ```

pub mod connections;
pub mod error;

mod health;
mod invoke;
mod models;
mod test_flight;
mod ws;

pub use connections::ConnectionRegistry;
pub use error::ApiError;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

use crate::config::GatewayConfig;
use crate::dispatch::Dispatcher;
use crate::upstream::AviationClient;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub config: GatewayConfig,
    pub upstream: AviationClient,
    pub dispatcher: Dispatcher,
    pub connections: ConnectionRegistry,
    /// Server startup time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create application state around one upstream client.
    pub fn new(config: GatewayConfig, upstream: AviationClient) -> Self {
        let dispatcher = Dispatcher::new(upstream.clone());

        Self {
            config,
            upstream,
            dispatcher,
            connections: ConnectionRegistry::new(),
            start_time: Instant::now(),
        }
    }
}

/// GET / - Service banner.
async fn root() -> Json<Value> {
    Json(json!({ "message": "Skybridge flight-data gateway is running" }))
}

/// Create the main API router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.server.request_body_limit_bytes;

    Router::new()
        .route("/", get(root))
        .route("/health", get(health::handle))
        .route("/models", get(models::handle))
        .route("/invoke", post(invoke::handle))
        .route("/test-flight", post(test_flight::handle))
        .route("/ws", get(ws::handle))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
