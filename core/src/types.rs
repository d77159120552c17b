//! Shared primitive types used across the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable hotel identifier, e.g. `HOTEL0042`.
pub type HotelId = String;

/// A dimensionless multiplier applied to a base price or staff count.
pub type Factor = f64;

/// Normalized city key used to join events to hotels.
///
/// Two locations match when their trimmed, lower-cased forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationKey(String);

impl LocationKey {
    pub fn new(location: &str) -> Self {
        Self(location.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocationKey {
    fn from(location: &str) -> Self {
        Self::new(location)
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Round to two decimal places, the precision of every published price.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
