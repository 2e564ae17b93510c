//! Skybridge - Flight-data model gateway
//!
//! This library provides the core functionality for dispatching model
//! requests to flight-data models over HTTP and WebSocket, backed by the
//! AviationStack API.

pub mod api;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod flights;
pub mod logging;
pub mod upstream;
