//! Request Handlers
//!
//! Stateless handlers consumed by the HTTP server. Request and response
//! types live beside the handler that produces them; the shapes here are the
//! service's public wire contract.

pub mod predict;

use serde::{Deserialize, Serialize};

pub use predict::{PredictError, PredictHandler, PredictResponse};

/// Body of every failure response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Operator- and client-facing message naming the violated constraint.
    pub error: String,
}

impl ErrorResponse {
    /// Build a failure body from any displayable error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Body of the health endpoint. Always served, even when the model failed
/// to load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Fixed literal `"healthy"`: the process is up and serving.
    pub status: String,

    /// Whether the predictor artifact was bound at startup.
    pub model_loaded: bool,
}

impl HealthStatus {
    /// Health report for a process with the given model state.
    pub fn healthy(model_loaded: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            model_loaded,
        }
    }
}
