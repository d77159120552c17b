//! Synthetic data set generation.
//!
//! Produces the four collections the store persists. Every draw comes from
//! the caller's RNG stream, so a seed reproduces the whole data set.

use crate::{
    config::GenerationConfig,
    name_generator::NameGenerator,
    rng::StreamRng,
    store::{Booking, Competitor, Country, DataStore, Event, Hotel},
    types::round2,
};
use chrono::{Duration, NaiveDate};

pub struct MockDataGenerator<'a> {
    config: &'a GenerationConfig,
    today:  NaiveDate,
}

impl<'a> MockDataGenerator<'a> {
    pub fn new(config: &'a GenerationConfig, today: NaiveDate) -> Self {
        Self { config, today }
    }

    /// Generate hotels first; bookings and competitors hang off them.
    pub fn generate(&self, rng: &mut StreamRng) -> DataStore {
        let hotels = self.generate_hotels(rng);
        let bookings = self.generate_bookings(&hotels, rng);
        let events = self.generate_events(rng);
        let competitors = self.generate_competitors(&hotels, rng);
        DataStore::new(hotels, bookings, events, competitors)
    }

    pub fn generate_hotels(&self, rng: &mut StreamRng) -> Vec<Hotel> {
        let (min_rooms, max_rooms) = (self.config.min_rooms.max(1), self.config.max_rooms);
        (0..self.config.hotel_count)
            .map(|i| Hotel {
                hotel_id: format!("HOTEL{:04}", i + 1),
                name:     NameGenerator::generate_hotel_name(rng),
                location: NameGenerator::generate_city(rng).to_string(),
                country:  *rng.choose(&Country::ALL),
                rooms:    rng.range_inclusive(min_rooms as u64, max_rooms.max(min_rooms) as u64) as u32,
                rating:   (rng.uniform(3.0, 5.0) * 10.0).round() / 10.0,
            })
            .collect()
    }

    /// `bookings_per_hotel` records per hotel on random upcoming dates.
    /// Dates are not deduplicated.
    pub fn generate_bookings(&self, hotels: &[Hotel], rng: &mut StreamRng) -> Vec<Booking> {
        let mut bookings = Vec::with_capacity(hotels.len() * self.config.bookings_per_hotel);
        for hotel in hotels {
            let high = (hotel.rooms / 2).max(10) as u64;
            for _ in 0..self.config.bookings_per_hotel {
                bookings.push(Booking {
                    hotel_id: hotel.hotel_id.clone(),
                    date:     self.upcoming_date(rng),
                    bookings: rng.range_inclusive(10, high) as u32,
                });
            }
        }
        bookings
    }

    pub fn generate_events(&self, rng: &mut StreamRng) -> Vec<Event> {
        let (low, high) = (self.config.min_attendance, self.config.max_attendance);
        (0..self.config.event_count)
            .map(|_| {
                let event_type = NameGenerator::generate_event_type(rng);
                let named_after = NameGenerator::generate_city(rng);
                Event {
                    event_id:            format!("EVENT{}", rng.range_inclusive(1000, 9999)),
                    name:                format!("{event_type} in {named_after}"),
                    date:                self.upcoming_date(rng),
                    location:            NameGenerator::generate_city(rng).to_string(),
                    expected_attendance: rng.range_inclusive(low as u64, high.max(low) as u64) as u32,
                }
            })
            .collect()
    }

    /// One competitor record per hotel.
    pub fn generate_competitors(&self, hotels: &[Hotel], rng: &mut StreamRng) -> Vec<Competitor> {
        hotels
            .iter()
            .map(|hotel| Competitor {
                hotel_id:         hotel.hotel_id.clone(),
                competitor_price: round2(rng.uniform(
                    self.config.min_competitor_price,
                    self.config.max_competitor_price,
                )),
            })
            .collect()
    }

    fn upcoming_date(&self, rng: &mut StreamRng) -> NaiveDate {
        let offset = rng.range_inclusive(0, self.config.lookahead_days as u64);
        self.today + Duration::days(offset as i64)
    }
}
