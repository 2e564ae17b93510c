//! WebSocket endpoint handler.
//!
//! Speaks the same request/response protocol as `POST /invoke`: each text
//! frame carries one model request and yields exactly one reply frame.
//! Failures come back as `{"error": "<message>"}` frames without closing
//! the connection; the peer decides when to hang up.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::AppState;
use crate::dispatch::ModelRequest;

/// GET /ws - Upgrade to the model dispatch protocol.
pub async fn handle(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Drive one established connection until the peer disconnects.
async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    let connection_id = state.connections.register();
    info!(connection_id = %connection_id, "WebSocket connected");

    while let Some(message) = socket.recv().await {
        let message = match message {
            Ok(message) => message,
            Err(e) => {
                warn!(connection_id = %connection_id, error = %e, "WebSocket transport error");
                break;
            }
        };

        match message {
            Message::Text(text) => {
                let reply = handle_text_frame(&state, &text).await;
                if socket.send(Message::Text(reply)).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            Message::Ping(_) => {
                // axum answers pings itself
            }
            _ => {}
        }
    }

    state.connections.deregister(&connection_id);
    info!(connection_id = %connection_id, "WebSocket disconnected");
}

/// Process one text frame into its reply frame.
///
/// Always produces a frame: malformed input yields an error frame rather
/// than a dropped message or a closed stream.
async fn handle_text_frame(state: &AppState, text: &str) -> String {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => return error_frame("Invalid JSON format"),
    };

    let request: ModelRequest = match serde_json::from_value(value) {
        Ok(request) => request,
        Err(e) => return error_frame(&format!("Invalid model request: {}", e)),
    };

    let model_id = request.model_id.clone();
    match state.dispatcher.dispatch(request).await {
        Ok(response) => serde_json::to_string(&response)
            .unwrap_or_else(|e| error_frame(&format!("Failed to serialize response: {}", e))),
        Err(e) => {
            warn!(model_id = %model_id, error = %e, "WebSocket dispatch failed");
            error_frame(&e.to_string())
        }
    }
}

fn error_frame(message: &str) -> String {
    json!({ "error": message }).to_string()
}
