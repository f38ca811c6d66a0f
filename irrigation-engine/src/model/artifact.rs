//! Model Artifact Loading
//!
//! The predictor artifact is a JSON document produced by an external
//! training pipeline: one weight row per output head, one bias per head, and
//! an output kind declaring whether the heads emit hard 0/1 labels or
//! logistic scores. The training procedure itself is out of scope here; the
//! artifact is opaque beyond [`Predictor::predict`].
//!
//! Loading happens exactly once at process startup and is best-effort: any
//! failure (missing file, parse error, shape error) is logged and yields
//! `None`, leaving the service able to start and report health rather than
//! aborting.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::contracts::{SensorReading, SENSOR_COUNT};
use crate::model::{InferenceError, PredictionOutput, PredictionValue, Predictor};

/// What the artifact's output heads emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    /// Hard 0/1 class labels.
    Binary,
    /// Logistic scores in (0.0, 1.0).
    Probability,
}

/// Serialized predictor artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Artifact name, for startup logging.
    pub name: String,

    /// Training pipeline version that produced the artifact.
    #[serde(default)]
    pub version: String,

    /// One coefficient row per output head; each row has [`SENSOR_COUNT`]
    /// entries.
    pub weights: Vec<Vec<f64>>,

    /// One bias term per output head.
    pub bias: Vec<f64>,

    /// Output kind shared by all heads.
    pub output: OutputKind,
}

/// Structural problems with a deserialized artifact.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArtifactError {
    /// The artifact declared no output heads at all.
    #[error("artifact has no output heads")]
    NoOutputs,

    /// A weight row did not match the sensor vector width.
    #[error("weight row {head} has {len} coefficients, expected {}", SENSOR_COUNT)]
    WeightShape {
        /// Index of the malformed head.
        head: usize,
        /// Coefficient count found.
        len: usize,
    },

    /// Bias count disagreed with the number of weight rows.
    #[error("artifact has {weights} weight rows but {bias} bias terms")]
    BiasShape {
        /// Number of weight rows.
        weights: usize,
        /// Number of bias terms.
        bias: usize,
    },
}

impl ModelArtifact {
    /// Check structural invariants after deserialization.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.weights.is_empty() {
            return Err(ArtifactError::NoOutputs);
        }
        for (head, row) in self.weights.iter().enumerate() {
            if row.len() != SENSOR_COUNT {
                return Err(ArtifactError::WeightShape {
                    head,
                    len: row.len(),
                });
            }
        }
        if self.bias.len() != self.weights.len() {
            return Err(ArtifactError::BiasShape {
                weights: self.weights.len(),
                bias: self.bias.len(),
            });
        }
        Ok(())
    }

    /// Number of output heads.
    pub fn heads(&self) -> usize {
        self.weights.len()
    }
}

/// Reasons an artifact failed to load.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    /// The artifact file could not be read.
    #[error("failed to read artifact: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents were not a valid artifact document.
    #[error("failed to parse artifact: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but violated a structural invariant.
    #[error("invalid artifact: {0}")]
    Invalid(#[from] ArtifactError),
}

/// Linear predictor backed by a validated [`ModelArtifact`].
#[derive(Debug, Clone)]
pub struct LinearModel {
    artifact: ModelArtifact,
}

impl LinearModel {
    /// Wrap a validated artifact.
    pub fn new(artifact: ModelArtifact) -> Result<Self, ArtifactError> {
        artifact.validate()?;
        Ok(Self { artifact })
    }

    /// The backing artifact.
    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    fn score_head(&self, head: usize, reading: &SensorReading) -> f64 {
        let row = &self.artifact.weights[head];
        let z: f64 = row
            .iter()
            .zip(reading.values())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.artifact.bias[head];
        sigmoid(z)
    }
}

impl Predictor for LinearModel {
    fn predict(&self, reading: &SensorReading) -> Result<PredictionOutput, InferenceError> {
        let values: Vec<PredictionValue> = (0..self.artifact.heads())
            .map(|head| {
                let score = self.score_head(head, reading);
                match self.artifact.output {
                    OutputKind::Probability => PredictionValue::Float(score),
                    OutputKind::Binary => PredictionValue::Integer(i64::from(score > 0.5)),
                }
            })
            .collect();

        // Single-head artifacts emit a bare score; multi-head artifacts emit
        // one row per input sample, matching multi-output training pipelines.
        if values.len() == 1 {
            Ok(PredictionOutput::Scalar(values[0]))
        } else {
            Ok(PredictionOutput::Nested(vec![values]))
        }
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Deserialize and validate an artifact from disk.
pub fn read_artifact(path: &Path) -> Result<LinearModel, ModelLoadError> {
    let raw = fs::read_to_string(path)?;
    let artifact: ModelArtifact = serde_json::from_str(&raw)?;
    Ok(LinearModel::new(artifact)?)
}

/// Load the predictor artifact, best effort.
///
/// On failure the error is logged and `None` is returned; the caller keeps
/// serving health checks with `model_loaded: false` instead of aborting.
pub fn load_model(path: &Path) -> Option<Arc<dyn Predictor>> {
    match read_artifact(path) {
        Ok(model) => {
            info!(
                path = %path.display(),
                name = %model.artifact().name,
                heads = model.artifact().heads(),
                "Model artifact loaded"
            );
            Some(Arc::new(model))
        }
        Err(e) => {
            error!(
                path = %path.display(),
                error = %e,
                "Failed to load model artifact; predictions are unavailable"
            );
            None
        }
    }
}
