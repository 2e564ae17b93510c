//! Model catalog endpoint handler.

use crate::dispatch::{descriptors, ModelDescriptor};
use axum::Json;
use serde::Serialize;

/// Model catalog response.
#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelDescriptor>,
}

/// GET /models - List the models this gateway can dispatch to.
pub async fn handle() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: descriptors(),
    })
}
