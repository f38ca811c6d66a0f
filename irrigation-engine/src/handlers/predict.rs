//! Prediction Handler
//!
//! Stateless handler for the prediction endpoint. Consumes the loaded model
//! (read-only, shared across all requests) and the incoming request body,
//! then runs the full pipeline:
//!
//! 1. Model availability check
//! 2. Payload shape check (`sensor_values` array present)
//! 3. Sensor validation (arity, numeric coercion, range)
//! 4. Inference
//! 5. Output normalization and binarization
//!
//! Each stage fails fast; validation failures are client errors, model
//! unavailability and inference failures are server errors. The handler
//! never panics on malformed model output.
//!
//! # Response Format
//!
//! ```json
//! {
//!   "success": true,
//!   "predictions": {"parcel_0": "ON", "parcel_1": "OFF", "parcel_2": "ON"},
//!   "sensor_values": [0.12, 0.5, ...]
//! }
//! ```
//!
//! `sensor_values` echoes the caller's original JSON elements untouched, so
//! clients can audit request/response pairs without server-side storage.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::contracts::{ParcelDecisions, SensorReading, SensorReadingError};
use crate::model::{binarize, normalize_output, Predictor};

/// Successful prediction response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Always `true`; failures use [`super::ErrorResponse`] instead.
    pub success: bool,

    /// One ON/OFF decision per parcel.
    pub predictions: ParcelDecisions,

    /// Echo of the request's sensor values, byte-for-byte.
    pub sensor_values: Vec<Value>,
}

/// Errors from the prediction pipeline.
///
/// `Display` output is the client-facing message. [`PredictError::is_client_error`]
/// decides the HTTP status class at the server layer.
#[derive(Debug, Error)]
pub enum PredictError {
    /// No model was bound at startup.
    #[error("Machine learning model is not available")]
    ModelUnavailable,

    /// The body was not a JSON object carrying a `sensor_values` array.
    #[error("Invalid request. Please provide sensor_values array.")]
    InvalidPayload,

    /// A sensor validation stage failed.
    #[error(transparent)]
    Reading(#[from] SensorReadingError),

    /// The model raised during inference, or its output was unusable.
    #[error("Prediction failed: {0}")]
    Inference(String),
}

impl PredictError {
    /// Whether the failure was caused by the request rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidPayload | Self::Reading(_))
    }
}

/// Stateless prediction handler.
///
/// Holds the process-wide model reference injected at startup; `None` means
/// the artifact failed to load and every prediction reports
/// [`PredictError::ModelUnavailable`] while health checks keep serving.
#[derive(Clone)]
pub struct PredictHandler {
    model: Option<Arc<dyn Predictor>>,
}

impl PredictHandler {
    /// Create a handler around the (possibly absent) loaded model.
    pub fn new(model: Option<Arc<dyn Predictor>>) -> Self {
        Self { model }
    }

    /// Whether a model is bound.
    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Run the full prediction pipeline over a parsed request body.
    #[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
    pub fn handle(&self, payload: &Value) -> Result<PredictResponse, PredictError> {
        let start_time = Instant::now();

        let model = self.model.as_ref().ok_or_else(|| {
            error!("Prediction requested but no model is loaded");
            PredictError::ModelUnavailable
        })?;

        let raw_values = payload
            .as_object()
            .and_then(|body| body.get("sensor_values"))
            .and_then(Value::as_array)
            .ok_or(PredictError::InvalidPayload)?;

        let reading = SensorReading::parse(raw_values)?;

        let output = model.predict(&reading).map_err(|e| {
            error!(error = %e, "Model inference failed");
            PredictError::Inference(e.to_string())
        })?;

        let values = normalize_output(&output).map_err(|e| {
            error!(error = %e, "Model output could not be normalized");
            PredictError::Inference(e.to_string())
        })?;

        let decisions = ParcelDecisions::new(values.map(binarize));

        info!(
            processing_time_ms = start_time.elapsed().as_millis() as u64,
            "Prediction completed"
        );

        Ok(PredictResponse {
            success: true,
            predictions: decisions,
            sensor_values: raw_values.clone(),
        })
    }
}
