use super::DataStore;
use crate::types::HotelId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub hotel_id: HotelId,
    pub date:     NaiveDate,
    pub bookings: u32,
}

impl DataStore {
    // ── Booking ───────────────────────────────────────────────────

    pub fn bookings_for(&self, hotel_id: &str) -> Vec<&Booking> {
        self.bookings.iter().filter(|b| b.hotel_id == hotel_id).collect()
    }
}

/// Mean daily booking count, or `None` when there are no records.
pub fn average_bookings(bookings: &[&Booking]) -> Option<f64> {
    if bookings.is_empty() {
        return None;
    }
    let total: u64 = bookings.iter().map(|b| b.bookings as u64).sum();
    Some(total as f64 / bookings.len() as f64)
}
