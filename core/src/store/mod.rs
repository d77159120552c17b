//! In-memory data store backed by four flat JSON files.
//!
//! RULE: Only the store touches the data directory.
//! Pipelines borrow the store read-only and never mutate it.

use crate::{
    clock::ForecastClock,
    config::GenerationConfig,
    error::OptimizerResult,
    mock_data::MockDataGenerator,
    rng::StreamRng,
};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

mod booking;
mod competitor;
mod event;
mod hotel;

pub use booking::{average_bookings, Booking};
pub use competitor::Competitor;
pub use event::{total_attendance, Event};
pub use hotel::{Country, Hotel};

pub const HOTELS_FILE:      &str = "hotels.json";
pub const BOOKINGS_FILE:    &str = "bookings.json";
pub const EVENTS_FILE:      &str = "events.json";
pub const COMPETITORS_FILE: &str = "competitors.json";

#[derive(Debug, Clone, Default)]
pub struct DataStore {
    pub hotels:      Vec<Hotel>,
    pub bookings:    Vec<Booking>,
    pub events:      Vec<Event>,
    pub competitors: Vec<Competitor>,
}

impl DataStore {
    pub fn new(
        hotels: Vec<Hotel>,
        bookings: Vec<Booking>,
        events: Vec<Event>,
        competitors: Vec<Competitor>,
    ) -> Self {
        Self { hotels, bookings, events, competitors }
    }

    /// Boot sequence: generate the data set when `hotels.json` is missing or
    /// an empty array, load all four collections, then patch hotel locations so some
    /// of them line up with event locations and write the hotels back.
    pub fn bootstrap(
        data_dir: &Path,
        generation: &GenerationConfig,
        clock: &ForecastClock,
        rng: &mut StreamRng,
    ) -> OptimizerResult<Self> {
        fs::create_dir_all(data_dir)?;

        if needs_generation(data_dir) {
            log::info!("Generating mock hotel data in {}", data_dir.display());
            let generated = MockDataGenerator::new(generation, clock.today).generate(rng);
            generated.save_dir(data_dir)?;
            log::info!(
                "Mock data generation complete: {} hotels, {} bookings, {} events, {} competitors",
                generated.hotels.len(),
                generated.bookings.len(),
                generated.events.len(),
                generated.competitors.len()
            );
        }

        let mut store = Self::load_dir(data_dir);
        if !store.hotels.is_empty() && !store.events.is_empty() {
            let patched = store.patch_locations();
            write_json(&data_dir.join(HOTELS_FILE), &store.hotels)?;
            log::info!("Updated {patched} hotels to match event locations");
        }
        Ok(store)
    }

    /// Load every collection. A missing or malformed file degrades to an
    /// empty collection and a warning; it is never fatal.
    pub fn load_dir(data_dir: &Path) -> Self {
        Self {
            hotels:      load_or_empty(&data_dir.join(HOTELS_FILE)),
            bookings:    load_or_empty(&data_dir.join(BOOKINGS_FILE)),
            events:      load_or_empty(&data_dir.join(EVENTS_FILE)),
            competitors: load_or_empty(&data_dir.join(COMPETITORS_FILE)),
        }
    }

    pub fn save_dir(&self, data_dir: &Path) -> OptimizerResult<()> {
        fs::create_dir_all(data_dir)?;
        write_json(&data_dir.join(HOTELS_FILE), &self.hotels)?;
        write_json(&data_dir.join(BOOKINGS_FILE), &self.bookings)?;
        write_json(&data_dir.join(EVENTS_FILE), &self.events)?;
        write_json(&data_dir.join(COMPETITORS_FILE), &self.competitors)?;
        Ok(())
    }

    /// Overwrite hotel `i`'s location with the `i`-th distinct event
    /// location (sorted), so the location join has something to find.
    /// Returns the number of hotels changed.
    pub fn patch_locations(&mut self) -> usize {
        let event_locations: BTreeSet<&str> =
            self.events.iter().map(|e| e.location.as_str()).collect();

        let mut patched = 0;
        for (hotel, location) in self.hotels.iter_mut().zip(event_locations) {
            hotel.location = location.to_string();
            patched += 1;
        }
        patched
    }
}

/// Generation runs only when `hotels.json` is absent or an empty array.
/// An unreadable or malformed file never triggers generation; `load_dir`
/// degrades it to an empty collection instead.
fn needs_generation(data_dir: &Path) -> bool {
    let path = data_dir.join(HOTELS_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return true,
        Err(e) => {
            log::warn!("Error reading {}: {e}", path.display());
            return false;
        }
    };
    match serde_json::from_str::<Vec<serde_json::Value>>(&content) {
        Ok(hotels) => hotels.is_empty(),
        Err(e) => {
            log::warn!("Error parsing {}, skipping generation: {e}", path.display());
            false
        }
    }
}

fn load_or_empty<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Error loading {}: {e}", path.display());
            return Vec::new();
        }
    };
    match serde_json::from_str(&content) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Error parsing {}: {e}", path.display());
            Vec::new()
        }
    }
}

fn write_json<T: Serialize>(path: &Path, items: &[T]) -> OptimizerResult<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}
