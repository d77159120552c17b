//! The optimizer engine: the context object every query goes through.
//!
//! RULES:
//!   - The store is read-only once the engine is built.
//!   - Pricing, staffing and sampling each draw from their own RNG
//!     stream, so one kind of query never shifts another's results.
//!   - "Today" comes from the engine's clock, never from the system
//!     clock directly.

use crate::{
    clock::ForecastClock,
    config::{HourlyRates, OptimizerConfig},
    error::OptimizerResult,
    explanation::{pricing_explanation, staffing_explanation},
    mock_data::MockDataGenerator,
    pricing::{PriceFactors, PriceForecastDay, PricingEngine},
    rng::{RngBank, StreamRng, StreamSlot},
    staffing::{Staffing, StaffingDay, StaffingEngine, StaffingFactors},
    store::{Country, DataStore, Event, Hotel},
    types::{HotelId, LocationKey},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub name: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingReport {
    pub hotel_id:        HotelId,
    pub hotel_name:      String,
    pub location:        String,
    pub country:         Country,
    pub rating:          f64,
    pub base_price:      f64,
    pub dynamic_price:   f64,
    pub pricing_factors: PriceFactors,
    pub price_forecast:  Vec<PriceForecastDay>,
    pub nearby_events:   Vec<EventSummary>,
    pub explanation:     String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingReport {
    pub hotel_id:          HotelId,
    pub hotel_name:        String,
    pub location:          String,
    pub rooms:             u32,
    pub staffing_factors:  StaffingFactors,
    pub base_staffing:     Staffing,
    pub forecast:          Vec<StaffingDay>,
    pub total_weekly_cost: f64,
    pub hourly_rates:      HourlyRates,
    pub explanation:       String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub hotel_count:   usize,
    pub country_count: usize,
    pub total_rooms:   u64,
    pub hotels:        Vec<Hotel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelEvents {
    pub hotel:       Hotel,
    pub event_count: usize,
    pub events:      Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationReport {
    pub hotel_locations:    Vec<String>,
    pub event_locations:    Vec<String>,
    pub matching_locations: Vec<String>,
    pub event_dates:        Vec<NaiveDate>,
    pub current_date:       NaiveDate,
    pub upcoming_dates:     Vec<NaiveDate>,
}

pub struct OptimizerEngine {
    pub config:   OptimizerConfig,
    pub clock:    ForecastClock,
    store:        DataStore,
    pricing_rng:  StreamRng,
    staffing_rng: StreamRng,
    sampling_rng: StreamRng,
}

impl OptimizerEngine {
    pub fn new(config: OptimizerConfig, clock: ForecastClock, store: DataStore, seed: u64) -> Self {
        let bank = RngBank::new(seed);
        Self {
            pricing_rng:  bank.for_stream(StreamSlot::Pricing),
            staffing_rng: bank.for_stream(StreamSlot::Staffing),
            sampling_rng: bank.for_stream(StreamSlot::Sampling),
            config,
            clock,
            store,
        }
    }

    /// Boot from a data directory, generating the data set if needed.
    pub fn build(
        data_dir: &Path,
        config: OptimizerConfig,
        clock: ForecastClock,
        seed: u64,
    ) -> OptimizerResult<Self> {
        let mut mock_rng = RngBank::new(seed).for_stream(StreamSlot::MockData);
        let store = DataStore::bootstrap(data_dir, &config.generation, &clock, &mut mock_rng)?;
        log::info!(
            "engine: loaded {} hotels, {} bookings, {} events, {} competitors (seed={seed})",
            store.hotels.len(),
            store.bookings.len(),
            store.events.len(),
            store.competitors.len()
        );
        Ok(Self::new(config, clock, store, seed))
    }

    /// Fully in-memory engine over a small generated data set.
    pub fn build_test(seed: u64) -> Self {
        let config = OptimizerConfig::default_test();
        let clock = ForecastClock::system();
        let mut mock_rng = RngBank::new(seed).for_stream(StreamSlot::MockData);
        let mut store = MockDataGenerator::new(&config.generation, clock.today).generate(&mut mock_rng);
        store.patch_locations();
        Self::new(config, clock, store, seed)
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// The hotel a caller gets when it does not name one.
    pub fn default_hotel_id(&self) -> OptimizerResult<&str> {
        Ok(self.store.first_hotel()?.hotel_id.as_str())
    }

    pub fn pricing_report(
        &mut self,
        hotel_id: &str,
        date: Option<NaiveDate>,
    ) -> OptimizerResult<PricingReport> {
        let hotel = self.store.hotel(hotel_id)?;
        let pricing = PricingEngine::new(&self.store);

        let quote = pricing.calculate_price(hotel, date, &self.clock, &mut self.pricing_rng);
        let price_forecast = pricing.price_forecast(hotel, &self.clock, &mut self.pricing_rng);

        let nearby_events = self
            .store
            .events_at(&hotel.location_key(), None)
            .into_iter()
            .take(self.config.report_event_limit)
            .map(|e| EventSummary { name: e.name.clone(), date: e.date })
            .collect();

        Ok(PricingReport {
            hotel_id:        hotel.hotel_id.clone(),
            hotel_name:      hotel.name.clone(),
            location:        hotel.location.clone(),
            country:         hotel.country,
            rating:          hotel.rating,
            base_price:      quote.base_price,
            dynamic_price:   quote.dynamic_price,
            pricing_factors: quote.factors.rounded(),
            price_forecast,
            nearby_events,
            explanation:     pricing_explanation(&hotel.name, &quote.factors),
        })
    }

    pub fn price_forecast(&mut self, hotel_id: &str) -> OptimizerResult<Vec<PriceForecastDay>> {
        let hotel = self.store.hotel(hotel_id)?;
        Ok(PricingEngine::new(&self.store).price_forecast(hotel, &self.clock, &mut self.pricing_rng))
    }

    pub fn staffing_report(
        &mut self,
        hotel_id: &str,
        date: Option<NaiveDate>,
    ) -> OptimizerResult<StaffingReport> {
        let hotel = self.store.hotel(hotel_id)?;
        let staffing = StaffingEngine::new(
            &self.store,
            &self.config.hourly_rates,
            self.config.shift_hours,
        );
        let plan = staffing.calculate_staffing(hotel, date, &self.clock, &mut self.staffing_rng);

        Ok(StaffingReport {
            hotel_id:          hotel.hotel_id.clone(),
            hotel_name:        hotel.name.clone(),
            location:          hotel.location.clone(),
            rooms:             hotel.rooms,
            staffing_factors:  plan.factors.rounded(),
            base_staffing:     plan.base_staffing,
            forecast:          plan.forecast,
            total_weekly_cost: plan.total_weekly_cost,
            hourly_rates:      self.config.hourly_rates,
            explanation:       staffing_explanation(&hotel.name, &plan.factors),
        })
    }

    /// Dashboard headline numbers plus a random sample of hotels.
    pub fn summary(&mut self) -> DashboardSummary {
        let hotels = &self.store.hotels;
        let sample = self
            .sampling_rng
            .sample_indices(hotels.len(), self.config.summary_sample_size)
            .into_iter()
            .map(|i| hotels[i].clone())
            .collect();

        DashboardSummary {
            hotel_count:   hotels.len(),
            country_count: self.store.country_count(),
            total_rooms:   self.store.total_rooms(),
            hotels:        sample,
        }
    }

    /// Hotels with at least one location-matched event inside the
    /// forecast horizon.
    pub fn hotels_with_events(&self) -> Vec<HotelEvents> {
        let horizon: HashSet<NaiveDate> = self.clock.horizon().into_iter().collect();
        self.store
            .hotels
            .iter()
            .filter_map(|hotel| {
                let events: Vec<Event> = self
                    .store
                    .events_at(&hotel.location_key(), None)
                    .into_iter()
                    .filter(|e| horizon.contains(&e.date))
                    .cloned()
                    .collect();
                (!events.is_empty()).then(|| HotelEvents {
                    hotel: hotel.clone(),
                    event_count: events.len(),
                    events,
                })
            })
            .collect()
    }

    /// Diagnostic view of how hotel and event locations line up.
    pub fn location_report(&self) -> LocationReport {
        let hotel_locations: BTreeSet<&str> =
            self.store.hotels.iter().map(|h| h.location.as_str()).collect();
        let event_locations: BTreeSet<&str> =
            self.store.events.iter().map(|e| e.location.as_str()).collect();
        let event_keys: HashSet<LocationKey> =
            self.store.events.iter().map(|e| e.location_key()).collect();
        let matching_locations = hotel_locations
            .iter()
            .filter(|l| event_keys.contains(&LocationKey::new(l)))
            .map(|l| l.to_string())
            .collect();
        let event_dates: BTreeSet<NaiveDate> = self.store.events.iter().map(|e| e.date).collect();

        LocationReport {
            hotel_locations: hotel_locations.into_iter().map(String::from).collect(),
            event_locations: event_locations.into_iter().map(String::from).collect(),
            matching_locations,
            event_dates: event_dates.into_iter().collect(),
            current_date: self.clock.today,
            upcoming_dates: self.clock.horizon(),
        }
    }
}
