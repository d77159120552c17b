use super::DataStore;
use crate::types::LocationKey;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id:            String,
    pub name:                String,
    pub date:                NaiveDate,
    pub location:            String,
    pub expected_attendance: u32,
}

impl Event {
    pub fn location_key(&self) -> LocationKey {
        LocationKey::new(&self.location)
    }
}

impl DataStore {
    // ── Event ─────────────────────────────────────────────────────

    /// Events at `location`, restricted to `date` when one is given.
    pub fn events_at(&self, location: &LocationKey, date: Option<NaiveDate>) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| &e.location_key() == location)
            .filter(|e| date.map_or(true, |d| e.date == d))
            .collect()
    }
}

pub fn total_attendance(events: &[&Event]) -> u64 {
    events.iter().map(|e| e.expected_attendance as u64).sum()
}
