//! Smart Irrigation Prediction Engine
//!
//! This crate provides the prediction infrastructure for the Smart Irrigation
//! service: request contracts, the model layer, and the stateless prediction
//! handler consumed by the HTTP server and the CLI.
//!
//! # Service Role
//!
//! The engine is a thin adapter around a single pre-trained predictor. It:
//!
//! - Validates incoming sensor payloads (arity, numeric coercion, range)
//! - Invokes the loaded model exactly once per request
//! - Normalizes whatever output shape the artifact produces down to three
//!   per-parcel values
//! - Binarizes those values into ON/OFF sprinkler decisions
//!
//! It does NOT:
//!
//! - Train or mutate the model (the artifact is read-only after load)
//! - Batch, queue, or retry requests
//! - Persist predictions
//!
//! # Usage
//!
//! ```rust,ignore
//! use irrigation_engine::handlers::PredictHandler;
//! use irrigation_engine::model::load_model;
//!
//! let model = load_model("models/irrigation_model.json".as_ref());
//! let handler = PredictHandler::new(model);
//! let response = handler.handle(&payload)?;
//! ```
//!
//! # Modules
//!
//! - [`contracts`]: Sensor input and parcel decision schemas
//! - [`model`]: Predictor trait, artifact loading, output normalization
//! - [`handlers`]: Request handlers and wire response types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod contracts;
pub mod handlers;
pub mod model;

// Re-export commonly used types
pub use contracts::{ParcelDecisions, SensorReading, SensorReadingError, SprinklerState};
pub use contracts::{PARCEL_COUNT, PARCEL_NAMES, SENSOR_COUNT};
pub use handlers::{ErrorResponse, HealthStatus, PredictError, PredictHandler, PredictResponse};
pub use model::{load_model, ModelArtifact, PredictionOutput, PredictionValue, Predictor};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
