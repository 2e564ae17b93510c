use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::flights::FlightReport;

/// Model id for the AviationStack-backed flight lookup.
pub const FLIGHT_INFO_MODEL: &str = "flight-info";

/// Model id for the transport prediction placeholder.
pub const TRANSPORT_PREDICTION_MODEL: &str = "transport-prediction";

/// A model invocation as received over HTTP or WebSocket.
///
/// Both fields are required; a frame missing either is rejected during
/// deserialization before it ever reaches the dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRequest {
    pub model_id: String,
    pub input_data: Map<String, Value>,
}

/// Output payload of a successful model invocation.
///
/// Serialized untagged: each variant already has a distinct shape on the
/// wire, so no discriminator field is added.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelOutput {
    FlightInfo(FlightReport),
    Placeholder {
        prediction: String,
        received_input: Map<String, Value>,
    },
}

/// Envelope returned for every successful model invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelResponse {
    pub model_id: String,
    pub output_data: ModelOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    pub timestamp: String,
}

impl ModelResponse {
    /// Build a response stamped with the current UTC time in RFC 3339.
    pub fn new(
        model_id: impl Into<String>,
        output_data: ModelOutput,
        metadata: Option<Value>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            output_data,
            metadata,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Catalog entry describing one dispatchable model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: String,
}

/// The static catalog of models this gateway can dispatch to.
pub fn descriptors() -> Vec<ModelDescriptor> {
    vec![
        ModelDescriptor {
            id: FLIGHT_INFO_MODEL.to_string(),
            name: "Flight Information Model".to_string(),
            description: "Fetches flight information from the AviationStack API".to_string(),
            version: "1.0.0".to_string(),
        },
        ModelDescriptor {
            id: TRANSPORT_PREDICTION_MODEL.to_string(),
            name: "Transport Prediction Model".to_string(),
            description: "Transport prediction model".to_string(),
            version: "1.0.0".to_string(),
        },
    ]
}
