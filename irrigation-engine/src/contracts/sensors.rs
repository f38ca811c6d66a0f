//! Sensor Input Contract
//!
//! The prediction endpoint consumes exactly [`SENSOR_COUNT`] normalized
//! sensor readings (soil moisture, weather signals, etc.), each in the closed
//! interval [0.0, 1.0]. A [`SensorReading`] is ephemeral: constructed per
//! request, discarded after the response.
//!
//! Validation is staged and fails fast. Each stage carries the exact
//! user-visible message as its `Display` output:
//!
//! 1. Arity: the array must contain exactly 20 elements
//! 2. Numeric coercion: every element must be a JSON number
//! 3. Range: every value must lie in [0.0, 1.0] inclusive

use serde_json::Value;
use thiserror::Error;

/// Number of sensor values per prediction request.
pub const SENSOR_COUNT: usize = 20;

/// Validation errors for incoming sensor payloads.
///
/// `Display` output is the message returned to the client verbatim, so the
/// wording here is part of the API surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SensorReadingError {
    /// The array held more or fewer than [`SENSOR_COUNT`] elements.
    #[error("Invalid sensor_values. Expected array of {} numeric values.", SENSOR_COUNT)]
    WrongArity {
        /// Element count actually received.
        actual: usize,
    },

    /// An element was not coercible to a floating-point number.
    #[error("All sensor values must be numeric.")]
    NotNumeric {
        /// Index of the offending element.
        index: usize,
    },

    /// A value fell outside the closed interval [0.0, 1.0].
    #[error("All sensor values must be between 0.0 and 1.0")]
    OutOfRange {
        /// Index of the offending element.
        index: usize,
        /// The out-of-range value.
        value: f64,
    },
}

/// A validated vector of [`SENSOR_COUNT`] normalized sensor values.
///
/// Construction via [`SensorReading::parse`] is the only way to obtain one,
/// so every instance is known to satisfy arity and range invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading([f64; SENSOR_COUNT]);

impl SensorReading {
    /// Validate raw JSON array elements into a reading.
    ///
    /// Stages run in order and short-circuit: arity, then numeric coercion
    /// over every element, then range. Integer JSON numbers coerce to
    /// floats; booleans, strings, nulls, arrays, and objects do not.
    pub fn parse(values: &[Value]) -> Result<Self, SensorReadingError> {
        if values.len() != SENSOR_COUNT {
            return Err(SensorReadingError::WrongArity {
                actual: values.len(),
            });
        }

        let mut reading = [0.0_f64; SENSOR_COUNT];
        for (index, value) in values.iter().enumerate() {
            reading[index] = value
                .as_f64()
                .ok_or(SensorReadingError::NotNumeric { index })?;
        }

        for (index, &value) in reading.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(SensorReadingError::OutOfRange { index, value });
            }
        }

        Ok(Self(reading))
    }

    /// The validated values, in request order.
    pub fn values(&self) -> &[f64; SENSOR_COUNT] {
        &self.0
    }
}
