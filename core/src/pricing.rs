//! Pricing factor pipeline.
//!
//! A nightly rate is `base_price(rating)` multiplied by five independent
//! factors. Season and competitor factors are drawn from a band, so every
//! call consumes the caller's RNG stream; the others are pure formulas.

use crate::{
    clock::ForecastClock,
    rng::StreamRng,
    store::{average_bookings, total_attendance, Booking, DataStore, Event, Hotel},
    types::{round2, Factor},
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Daily jitter applied on top of each forecast day's price.
pub const DAILY_JITTER: (f64, f64) = (0.95, 1.05);

/// Calendar band that decides the season factor's draw range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonBand {
    Summer,
    Holiday,
    Shoulder,
    Low,
}

impl SeasonBand {
    pub fn for_date(date: NaiveDate) -> Self {
        match (date.month(), date.day()) {
            (6..=8, _)          => Self::Summer,
            (12, day) if day >= 15 => Self::Holiday,
            (4 | 5 | 9 | 10, _) => Self::Shoulder,
            _                   => Self::Low,
        }
    }

    /// Half-open draw range `[low, high)`.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Summer   => (1.15, 1.30),
            Self::Holiday  => (1.20, 1.35),
            Self::Shoulder => (1.00, 1.15),
            Self::Low      => (0.85, 1.00),
        }
    }
}

pub fn season_factor(date: NaiveDate, rng: &mut StreamRng) -> Factor {
    let (low, high) = SeasonBand::for_date(date).range();
    rng.uniform(low, high)
}

/// `0.8 + min(avg/50, 0.7)`; neutral when the hotel has no bookings.
pub fn demand_factor(bookings: &[&Booking]) -> Factor {
    match average_bookings(bookings) {
        Some(avg) => 0.8 + (avg / 50.0).min(0.7),
        None => 1.0,
    }
}

/// `1.0 + min(attendance/10000, 0.5)`; neutral with no events.
pub fn event_factor(events: &[&Event]) -> Factor {
    if events.is_empty() {
        return 1.0;
    }
    1.0 + (total_attendance(events) as f64 / 10_000.0).min(0.5)
}

pub fn competitor_factor(
    competitor_price: Option<f64>,
    base_price: f64,
    rng: &mut StreamRng,
) -> Factor {
    let Some(price) = competitor_price else {
        return 1.0;
    };
    let ratio = price / base_price;
    if ratio > 1.1 {
        rng.uniform(1.05, 1.15)
    } else if ratio < 0.9 {
        rng.uniform(0.90, 0.98)
    } else {
        rng.uniform(0.95, 1.05)
    }
}

pub fn luxury_factor(rating: f64) -> Factor {
    1.0 + (rating - 3.0) * 0.15
}

pub fn base_price(rating: f64) -> f64 {
    100.0 + rating * 40.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceFactors {
    pub season_factor:     Factor,
    pub demand_factor:     Factor,
    pub event_factor:      Factor,
    pub competitor_factor: Factor,
    pub luxury_factor:     Factor,
}

impl PriceFactors {
    pub fn product(&self) -> Factor {
        self.season_factor
            * self.demand_factor
            * self.event_factor
            * self.competitor_factor
            * self.luxury_factor
    }

    /// Two-decimal copy for publishing.
    pub fn rounded(&self) -> Self {
        Self {
            season_factor:     round2(self.season_factor),
            demand_factor:     round2(self.demand_factor),
            event_factor:      round2(self.event_factor),
            competitor_factor: round2(self.competitor_factor),
            luxury_factor:     round2(self.luxury_factor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub base_price:    f64,
    pub dynamic_price: f64,
    /// Unrounded; use `factors.rounded()` for display.
    pub factors:       PriceFactors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceForecastDay {
    pub date:      NaiveDate,
    pub price:     f64,
    pub has_event: bool,
    pub factors:   PriceFactors,
}

/// Computes quotes for hotels in a borrowed store.
pub struct PricingEngine<'a> {
    store: &'a DataStore,
}

impl<'a> PricingEngine<'a> {
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    /// Single-point quote. The season is taken from `date` (or today);
    /// events are restricted to `date` only when one is given.
    pub fn calculate_price(
        &self,
        hotel: &Hotel,
        date: Option<NaiveDate>,
        clock: &ForecastClock,
        rng: &mut StreamRng,
    ) -> PriceQuote {
        let bookings = self.store.bookings_for(&hotel.hotel_id);
        let events = self.store.events_at(&hotel.location_key(), date);
        let base = base_price(hotel.rating);

        let factors = PriceFactors {
            season_factor:     season_factor(clock.resolve(date), rng),
            demand_factor:     demand_factor(&bookings),
            event_factor:      event_factor(&events),
            competitor_factor: competitor_factor(
                self.store.competitor_price(&hotel.hotel_id),
                base,
                rng,
            ),
            luxury_factor:     luxury_factor(hotel.rating),
        };

        let dynamic_price = round2(base * factors.product());
        log::debug!(
            "pricing: {} date={:?} base={base:.2} factors={:?} price={dynamic_price:.2}",
            hotel.hotel_id, date, factors
        );

        PriceQuote { base_price: base, dynamic_price, factors }
    }

    /// The 7-day forecast starting today. Each day is quoted for its own
    /// date, then scaled by an independent jitter draw.
    pub fn price_forecast(
        &self,
        hotel: &Hotel,
        clock: &ForecastClock,
        rng: &mut StreamRng,
    ) -> Vec<PriceForecastDay> {
        let location = hotel.location_key();
        clock
            .horizon()
            .into_iter()
            .map(|date| {
                let jitter = rng.uniform(DAILY_JITTER.0, DAILY_JITTER.1);
                let quote = self.calculate_price(hotel, Some(date), clock, rng);
                PriceForecastDay {
                    date,
                    price:     round2(quote.dynamic_price * jitter),
                    has_event: !self.store.events_at(&location, Some(date)).is_empty(),
                    factors:   quote.factors.rounded(),
                }
            })
            .collect()
    }
}
