//! Shared test utilities for Skybridge integration tests.
//!
//! Provides helpers for building application state against mock upstreams,
//! serving the router on an ephemeral port, and reading response bodies.

#![allow(dead_code)]

use axum::body::Body;
use futures_util::StreamExt;
use serde_json::{json, Value};
use skybridge::api::{create_router, AppState};
use skybridge::config::GatewayConfig;
use skybridge::upstream::AviationClient;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Build application state talking to the given upstream base URL.
pub fn make_state(base_url: &str, access_key: Option<&str>) -> Arc<AppState> {
    let client = AviationClient::from_parts(
        base_url,
        access_key.map(str::to_string),
        Duration::from_secs(5),
    );
    Arc::new(AppState::new(GatewayConfig::default(), client))
}

/// Create a test app proxying to a wiremock server.
pub fn make_app_with_mock(mock_server: &wiremock::MockServer) -> axum::Router {
    create_router(make_state(&mock_server.uri(), Some("test-key")))
}

/// Create a test app with no access key configured.
///
/// Port 9 is never listened on, so any request that does reach the client
/// fails fast instead of hanging.
pub fn make_app_without_key() -> axum::Router {
    create_router(make_state("http://127.0.0.1:9", None))
}

/// Serve the app on an ephemeral port in the background.
pub async fn spawn_app(state: Arc<AppState>) -> SocketAddr {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Two-flight AviationStack payload: one active, one landed.
pub fn aviationstack_payload() -> Value {
    json!({
        "pagination": { "limit": 100, "offset": 0, "count": 2, "total": 2 },
        "data": [
            {
                "flight_status": "active",
                "airline": { "name": "Lufthansa" },
                "flight": { "iata": "LH404" },
                "departure": {
                    "airport": "Frankfurt International",
                    "iata": "FRA",
                    "scheduled": "2025-03-01T10:30:00+00:00",
                    "actual": "2025-03-01T10:41:00+00:00"
                },
                "arrival": {
                    "airport": "John F Kennedy International",
                    "iata": "JFK",
                    "scheduled": "2025-03-01T13:50:00+00:00",
                    "actual": null
                }
            },
            {
                "flight_status": "landed",
                "airline": { "name": "British Airways" },
                "flight": { "iata": "BA2490" },
                "departure": {
                    "airport": "Heathrow",
                    "iata": "LHR",
                    "scheduled": "2025-03-01T08:00:00+00:00",
                    "actual": "2025-03-01T08:05:00+00:00"
                },
                "arrival": {
                    "airport": "Glasgow",
                    "iata": "GLA",
                    "scheduled": "2025-03-01T09:25:00+00:00",
                    "actual": "2025-03-01T09:19:00+00:00"
                }
            }
        ]
    })
}

/// Helper to read a response body as a string.
pub async fn body_to_string(body: Body) -> String {
    let mut body_stream = body.into_data_stream();
    let mut result = String::new();
    while let Some(chunk) = body_stream.next().await {
        if let Ok(bytes) = chunk {
            result.push_str(&String::from_utf8_lossy(&bytes));
        }
    }
    result
}

/// Helper to read a response body as JSON.
pub async fn body_to_json(body: Body) -> Value {
    serde_json::from_str(&body_to_string(body).await).unwrap()
}
