//! Output Normalization
//!
//! Compatibility shim over the model's output shape. A generic artifact may
//! emit a scalar, a flat sequence, or a nested row per sample; the service
//! contract needs exactly one value per parcel. The rule, applied uniformly
//! to whichever sequence is in hand:
//!
//! - at least [`PARCEL_COUNT`] values: take the first three
//! - fewer, but at least one: replicate the first value across all parcels
//! - none: error (surfaced as an inference failure)
//!
//! For nested output the first row is the relevant sequence; extra rows are
//! ignored (requests are single-sample).

use thiserror::Error;

use crate::contracts::{SprinklerState, PARCEL_COUNT};
use crate::model::{PredictionOutput, PredictionValue};

/// Error normalizing a model output to per-parcel values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// The model emitted a sequence with no values in it.
    #[error("model returned no prediction values")]
    EmptyOutput,
}

/// Reduce a raw model output to exactly one value per parcel.
pub fn normalize_output(
    output: &PredictionOutput,
) -> Result<[PredictionValue; PARCEL_COUNT], NormalizeError> {
    match output {
        PredictionOutput::Scalar(value) => Ok([*value; PARCEL_COUNT]),
        PredictionOutput::Vector(values) => spread(values),
        PredictionOutput::Nested(rows) => {
            let row = rows.first().ok_or(NormalizeError::EmptyOutput)?;
            spread(row)
        }
    }
}

/// Take the first three values, or replicate a lone leading value.
fn spread(values: &[PredictionValue]) -> Result<[PredictionValue; PARCEL_COUNT], NormalizeError> {
    if values.len() >= PARCEL_COUNT {
        Ok([values[0], values[1], values[2]])
    } else {
        let first = values.first().ok_or(NormalizeError::EmptyOutput)?;
        Ok([*first; PARCEL_COUNT])
    }
}

/// Convert one raw value into a sprinkler decision.
///
/// Integer labels use the equality rule (ON iff exactly 1); float scores use
/// the strict threshold rule (ON iff greater than 0.5). A float of exactly
/// 0.5 is OFF.
pub fn binarize(value: PredictionValue) -> SprinklerState {
    let on = match value {
        PredictionValue::Integer(label) => label == 1,
        PredictionValue::Float(score) => score > 0.5,
    };
    if on {
        SprinklerState::On
    } else {
        SprinklerState::Off
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use PredictionValue::{Float, Integer};

    #[test]
    fn test_scalar_replicates() {
        let output = PredictionOutput::Scalar(Float(0.7));
        assert_eq!(normalize_output(&output).unwrap(), [Float(0.7); 3]);
    }

    #[test]
    fn test_flat_vector_takes_first_three() {
        let output = PredictionOutput::Vector(vec![Integer(0), Integer(1), Integer(0), Integer(1)]);
        assert_eq!(
            normalize_output(&output).unwrap(),
            [Integer(0), Integer(1), Integer(0)]
        );
    }

    #[test]
    fn test_short_vector_replicates_first() {
        for values in [vec![Float(0.9)], vec![Float(0.9), Float(0.1)]] {
            let output = PredictionOutput::Vector(values);
            assert_eq!(normalize_output(&output).unwrap(), [Float(0.9); 3]);
        }
    }

    #[test]
    fn test_nested_row_takes_first_three() {
        let output = PredictionOutput::Nested(vec![vec![Float(0.2), Float(0.9), Float(0.51)]]);
        assert_eq!(
            normalize_output(&output).unwrap(),
            [Float(0.2), Float(0.9), Float(0.51)]
        );
    }

    #[test]
    fn test_nested_ignores_extra_rows() {
        let output = PredictionOutput::Nested(vec![
            vec![Integer(1), Integer(0), Integer(1)],
            vec![Integer(0), Integer(0), Integer(0)],
        ]);
        assert_eq!(
            normalize_output(&output).unwrap(),
            [Integer(1), Integer(0), Integer(1)]
        );
    }

    #[test]
    fn test_short_nested_row_replicates_first() {
        let output = PredictionOutput::Nested(vec![vec![Integer(1), Integer(0)]]);
        assert_eq!(normalize_output(&output).unwrap(), [Integer(1); 3]);
    }

    #[test]
    fn test_empty_outputs_error() {
        for output in [
            PredictionOutput::Vector(vec![]),
            PredictionOutput::Nested(vec![]),
            PredictionOutput::Nested(vec![vec![]]),
        ] {
            assert_eq!(
                normalize_output(&output).unwrap_err(),
                NormalizeError::EmptyOutput
            );
        }
    }

    #[test]
    fn test_binarize_integer_equality_rule() {
        assert_eq!(binarize(Integer(1)), SprinklerState::On);
        assert_eq!(binarize(Integer(0)), SprinklerState::Off);
        // Any label other than exactly 1 is OFF, even "truthy" ones.
        assert_eq!(binarize(Integer(2)), SprinklerState::Off);
        assert_eq!(binarize(Integer(-1)), SprinklerState::Off);
    }

    #[test]
    fn test_binarize_float_threshold_rule() {
        assert_eq!(binarize(Float(0.7)), SprinklerState::On);
        assert_eq!(binarize(Float(0.51)), SprinklerState::On);
        assert_eq!(binarize(Float(0.5)), SprinklerState::Off);
        assert_eq!(binarize(Float(0.2)), SprinklerState::Off);
        assert_eq!(binarize(Float(1.0)), SprinklerState::On);
    }
}
