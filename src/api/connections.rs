//! Live WebSocket connection registry.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// Metadata tracked for one live WebSocket connection.
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connected_at: DateTime<Utc>,
}

/// Concurrency-safe registry of live WebSocket connections.
///
/// Socket handlers register on upgrade and deregister when the connection
/// closes. Shared through `AppState`, never through a global.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: DashMap<String, ConnectionInfo>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new connection, returning its generated id.
    pub fn register(&self) -> String {
        let id = Uuid::new_v4().to_string();
        self.connections.insert(
            id.clone(),
            ConnectionInfo {
                connected_at: Utc::now(),
            },
        );
        id
    }

    /// Stop tracking a connection. Returns false when the id was unknown.
    pub fn deregister(&self, id: &str) -> bool {
        self.connections.remove(id).is_some()
    }

    /// Number of currently tracked connections.
    pub fn active_count(&self) -> usize {
        self.connections.len()
    }
}
