use super::DataStore;
use crate::types::HotelId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub hotel_id:         HotelId,
    pub competitor_price: f64,
}

impl DataStore {
    // ── Competitor ────────────────────────────────────────────────

    /// The competitor's nightly rate, if a usable one is on file.
    pub fn competitor_price(&self, hotel_id: &str) -> Option<f64> {
        self.competitors
            .iter()
            .find(|c| c.hotel_id == hotel_id)
            .map(|c| c.competitor_price)
            .filter(|price| *price > 0.0)
    }
}
