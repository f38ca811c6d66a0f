//! Model Layer
//!
//! The predictor is an opaque, externally-trained artifact: loaded once at
//! process start, shared read-only across all requests, never mutated. The
//! only capability it exposes is [`Predictor::predict`].
//!
//! Because artifacts trained by different procedures disagree on output
//! shape (one model emits a single score, another emits one score per
//! parcel, another a nested row per input sample), the output is a typed
//! union ([`PredictionOutput`]) that [`normalize::normalize_output`] reduces
//! to exactly one value per parcel.
//!
//! - [`artifact`]: the serialized linear-model artifact and its loader
//! - [`normalize`]: pure output-normalization and binarization functions

pub mod artifact;
pub mod normalize;

use thiserror::Error;

use crate::contracts::SensorReading;

pub use artifact::{load_model, ModelArtifact, OutputKind};
pub use normalize::{binarize, normalize_output, NormalizeError};

/// Error raised by a predictor during inference.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct InferenceError {
    /// Short operator-facing description of the failure.
    pub message: String,
}

impl InferenceError {
    /// Create an inference error from any displayable detail.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A single raw value emitted by a model.
///
/// The integer/float distinction is semantic, not incidental: classifiers
/// emit hard integer labels (ON iff exactly 1) while regressors emit
/// probability-like floats (ON iff strictly above 0.5). See
/// [`normalize::binarize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PredictionValue {
    /// Hard class label from a classifier.
    Integer(i64),
    /// Probability-like score from a regressor.
    Float(f64),
}

/// Raw model output, shape unknown ahead of time.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutput {
    /// Single value for the whole field.
    Scalar(PredictionValue),
    /// Flat sequence of values.
    Vector(Vec<PredictionValue>),
    /// Nested sequence: one row per input sample.
    Nested(Vec<Vec<PredictionValue>>),
}

/// The single capability a loaded model exposes.
///
/// Implementations must be safe to share across concurrent requests; the
/// handler holds them behind `Arc<dyn Predictor>` and never mutates them
/// after load.
pub trait Predictor: Send + Sync {
    /// Run inference on one validated sensor reading (a single-row,
    /// 20-column input).
    fn predict(&self, reading: &SensorReading) -> Result<PredictionOutput, InferenceError>;
}
