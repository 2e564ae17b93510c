//! Model dispatch.
//!
//! A [`Dispatcher`] routes each [`ModelRequest`] to the model named by its
//! `model_id`, runs it, and wraps the result in a [`ModelResponse`]. The
//! HTTP and WebSocket surfaces both funnel through [`Dispatcher::dispatch`],
//! so the two transports cannot drift apart in behavior.

pub mod error;
pub mod types;

pub use error::DispatchError;
pub use types::{
    descriptors, ModelDescriptor, ModelOutput, ModelRequest, ModelResponse, FLIGHT_INFO_MODEL,
    TRANSPORT_PREDICTION_MODEL,
};

use serde_json::{json, Map, Value};
use tracing::info;

use crate::flights;
use crate::upstream::AviationClient;

/// Canned prediction returned by the transport model until a real one lands.
pub const PLACEHOLDER_PREDICTION: &str =
    "This is a placeholder response. The real prediction will go here.";

/// Routes model requests to their implementations.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    upstream: AviationClient,
}

impl Dispatcher {
    pub fn new(upstream: AviationClient) -> Self {
        Self { upstream }
    }

    /// Execute a model request and produce its response envelope.
    pub async fn dispatch(&self, request: ModelRequest) -> Result<ModelResponse, DispatchError> {
        if request.model_id == FLIGHT_INFO_MODEL {
            self.flight_info(&request.input_data).await
        } else if request.model_id == TRANSPORT_PREDICTION_MODEL {
            Ok(Self::transport_prediction(request.input_data))
        } else {
            Err(DispatchError::UnknownModel(request.model_id))
        }
    }

    /// Fetch flights for the requested IATA code and reshape the payload.
    async fn flight_info(
        &self,
        input: &Map<String, Value>,
    ) -> Result<ModelResponse, DispatchError> {
        let flight_iata = input
            .get("flight_iata")
            .and_then(Value::as_str)
            .filter(|code| !code.is_empty())
            .ok_or_else(|| {
                DispatchError::Validation("Flight IATA code is required".to_string())
            })?;

        info!(flight_iata, "Dispatching flight-info request");

        let raw = self.upstream.fetch_flights(flight_iata).await?;
        let report = flights::reshape(&raw);

        Ok(ModelResponse::new(
            FLIGHT_INFO_MODEL,
            ModelOutput::FlightInfo(report),
            Some(json!({ "source": "AviationStack API" })),
        ))
    }

    /// Echo the input back with a canned prediction.
    fn transport_prediction(input: Map<String, Value>) -> ModelResponse {
        info!("Dispatching transport-prediction request");

        ModelResponse::new(
            TRANSPORT_PREDICTION_MODEL,
            ModelOutput::Placeholder {
                prediction: PLACEHOLDER_PREDICTION.to_string(),
                received_input: input,
            },
            Some(json!({ "status": "placeholder" })),
        )
    }
}
