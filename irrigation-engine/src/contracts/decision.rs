//! Parcel Decision Contract
//!
//! The service controls three independently-irrigated field parcels. Every
//! successful prediction yields exactly one ON/OFF decision per parcel,
//! keyed `parcel_0` through `parcel_2`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of irrigated parcels.
pub const PARCEL_COUNT: usize = 3;

/// Fixed parcel identifiers, in output order.
pub const PARCEL_NAMES: [&str; PARCEL_COUNT] = ["parcel_0", "parcel_1", "parcel_2"];

/// Binary sprinkler decision for a single parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SprinklerState {
    /// Sprinkler should run.
    On,
    /// Sprinkler should stay off.
    Off,
}

/// Mapping from parcel identifier to sprinkler decision.
///
/// Invariant: exactly [`PARCEL_COUNT`] entries with the fixed
/// [`PARCEL_NAMES`] key set. Serialized as a flat JSON object, e.g.
/// `{"parcel_0":"ON","parcel_1":"OFF","parcel_2":"ON"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParcelDecisions(BTreeMap<String, SprinklerState>);

impl ParcelDecisions {
    /// Build the decision map from one state per parcel, in parcel order.
    pub fn new(states: [SprinklerState; PARCEL_COUNT]) -> Self {
        let map = PARCEL_NAMES
            .iter()
            .zip(states)
            .map(|(name, state)| ((*name).to_string(), state))
            .collect();
        Self(map)
    }

    /// Decision for a parcel, if the identifier is known.
    pub fn get(&self, parcel: &str) -> Option<SprinklerState> {
        self.0.get(parcel).copied()
    }

    /// Number of entries (always [`PARCEL_COUNT`] for constructed values).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty. Never true for constructed values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_state_serializes_uppercase() {
        assert_eq!(serde_json::to_value(SprinklerState::On).unwrap(), json!("ON"));
        assert_eq!(serde_json::to_value(SprinklerState::Off).unwrap(), json!("OFF"));
    }

    #[test]
    fn test_state_round_trip() {
        let state: SprinklerState = serde_json::from_value(json!("ON")).unwrap();
        assert_eq!(state, SprinklerState::On);
    }

    #[test]
    fn test_decisions_have_fixed_key_set() {
        let decisions = ParcelDecisions::new([
            SprinklerState::Off,
            SprinklerState::On,
            SprinklerState::Off,
        ]);

        assert_eq!(decisions.len(), PARCEL_COUNT);
        assert_eq!(decisions.get("parcel_0"), Some(SprinklerState::Off));
        assert_eq!(decisions.get("parcel_1"), Some(SprinklerState::On));
        assert_eq!(decisions.get("parcel_2"), Some(SprinklerState::Off));
        assert_eq!(decisions.get("parcel_3"), None);
    }

    #[test]
    fn test_decisions_serialize_flat() {
        let decisions = ParcelDecisions::new([
            SprinklerState::On,
            SprinklerState::On,
            SprinklerState::Off,
        ]);

        assert_eq!(
            serde_json::to_value(&decisions).unwrap(),
            json!({"parcel_0": "ON", "parcel_1": "ON", "parcel_2": "OFF"})
        );
    }
}
