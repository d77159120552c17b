use super::DataStore;
use crate::{
    error::{OptimizerError, OptimizerResult},
    types::{HotelId, LocationKey},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "USA")]
    Usa,
    France,
    Germany,
    Japan,
    Australia,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::Usa,
        Country::France,
        Country::Germany,
        Country::Japan,
        Country::Australia,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub hotel_id: HotelId,
    pub name:     String,
    pub location: String,
    pub country:  Country,
    pub rooms:    u32,
    pub rating:   f64,
}

impl Hotel {
    pub fn location_key(&self) -> LocationKey {
        LocationKey::new(&self.location)
    }
}

impl DataStore {
    // ── Hotel ─────────────────────────────────────────────────────

    pub fn hotel(&self, hotel_id: &str) -> OptimizerResult<&Hotel> {
        self.hotels
            .iter()
            .find(|h| h.hotel_id == hotel_id)
            .ok_or_else(|| OptimizerError::HotelNotFound { hotel_id: hotel_id.to_string() })
    }

    pub fn first_hotel(&self) -> OptimizerResult<&Hotel> {
        self.hotels.first().ok_or(OptimizerError::NoHotels)
    }

    pub fn total_rooms(&self) -> u64 {
        self.hotels.iter().map(|h| h.rooms as u64).sum()
    }

    pub fn country_count(&self) -> usize {
        let mut countries: Vec<Country> = self.hotels.iter().map(|h| h.country).collect();
        countries.sort_unstable();
        countries.dedup();
        countries.len()
    }
}
