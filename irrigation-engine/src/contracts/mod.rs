//! Wire Contracts
//!
//! Input and output schemas shared by the HTTP server and the CLI.
//!
//! - [`sensors`]: the validated 20-value sensor reading consumed per request
//! - [`decision`]: per-parcel ON/OFF sprinkler decisions

pub mod decision;
pub mod sensors;

pub use decision::{ParcelDecisions, SprinklerState, PARCEL_COUNT, PARCEL_NAMES};
pub use sensors::{SensorReading, SensorReadingError, SENSOR_COUNT};
