//! Staffing factor pipeline.
//!
//! Base headcount per department scales with room count. Each forecast
//! day applies a department-specific mix of the occupancy, event, weekend
//! and seasonal factors, then re-applies the department floor.

use crate::{
    clock::ForecastClock,
    config::HourlyRates,
    rng::StreamRng,
    store::{average_bookings, total_attendance, Booking, DataStore, Event, Hotel},
    types::{round2, Factor},
};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Housekeeping's per-day occupancy jitter.
pub const OCCUPANCY_JITTER: (f64, f64) = (0.9, 1.1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    FrontDesk,
    Housekeeping,
    Concierge,
    Restaurant,
    Maintenance,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::FrontDesk,
        Department::Housekeeping,
        Department::Concierge,
        Department::Restaurant,
        Department::Maintenance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FrontDesk    => "front_desk",
            Self::Housekeeping => "housekeeping",
            Self::Concierge    => "concierge",
            Self::Restaurant   => "restaurant",
            Self::Maintenance  => "maintenance",
        }
    }

    /// Minimum headcount enforced on every forecast day.
    pub fn forecast_floor(&self) -> Option<u32> {
        match self {
            Self::FrontDesk    => Some(2),
            Self::Housekeeping => Some(5),
            Self::Maintenance  => Some(2),
            Self::Concierge | Self::Restaurant => None,
        }
    }

    fn multiplier(&self, day: &DayFactors) -> Factor {
        match self {
            Self::FrontDesk    => day.occupancy * day.weekend * day.event * 1.05,
            Self::Housekeeping => day.daily_occupancy * 1.1,
            Self::Concierge    => day.event * day.weekend * 1.2,
            Self::Restaurant   => day.occupancy * day.weekend * day.event * 1.2,
            Self::Maintenance  => day.seasonal * 0.95,
        }
    }
}

/// Headcount per department.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staffing {
    pub front_desk:   u32,
    pub housekeeping: u32,
    pub concierge:    u32,
    pub restaurant:   u32,
    pub maintenance:  u32,
}

impl Staffing {
    pub fn get(&self, department: Department) -> u32 {
        match department {
            Department::FrontDesk    => self.front_desk,
            Department::Housekeeping => self.housekeeping,
            Department::Concierge    => self.concierge,
            Department::Restaurant   => self.restaurant,
            Department::Maintenance  => self.maintenance,
        }
    }

    pub fn set(&mut self, department: Department, staff: u32) {
        match department {
            Department::FrontDesk    => self.front_desk = staff,
            Department::Housekeeping => self.housekeeping = staff,
            Department::Concierge    => self.concierge = staff,
            Department::Restaurant   => self.restaurant = staff,
            Department::Maintenance  => self.maintenance = staff,
        }
    }

    pub fn total(&self) -> u32 {
        Department::ALL.iter().map(|d| self.get(*d)).sum()
    }
}

/// Half-to-even rounding of a non-negative quotient.
fn round_count(value: f64) -> u32 {
    value.round_ties_even().max(0.0) as u32
}

pub fn base_staffing(rooms: u32) -> Staffing {
    let rooms = rooms as f64;
    Staffing {
        front_desk:   (round_count(rooms / 100.0) + 1).max(2),
        housekeeping: round_count(rooms / 15.0).max(5),
        concierge:    round_count(rooms / 150.0).max(1),
        restaurant:   round_count(rooms / 50.0).max(4),
        maintenance:  round_count(rooms / 125.0).max(2),
    }
}

/// `0.7 + 0.6 * min(1, avg/rooms)`; neutral with no bookings.
pub fn occupancy_factor(bookings: &[&Booking], rooms: u32) -> Factor {
    match average_bookings(bookings) {
        Some(avg) if rooms > 0 => 0.7 + 0.6 * (avg / rooms as f64).min(1.0),
        _ => 1.0,
    }
}

/// `1.15 + min(attendance/15000, 0.35)`; neutral with no events.
pub fn event_factor(events: &[&Event]) -> Factor {
    if events.is_empty() {
        return 1.0;
    }
    1.15 + (total_attendance(events) as f64 / 15_000.0).min(0.35)
}

pub fn weekend_factor(date: NaiveDate) -> Factor {
    match date.weekday() {
        Weekday::Fri | Weekday::Sat | Weekday::Sun => 1.15,
        _ => 1.0,
    }
}

pub fn seasonal_factor(date: NaiveDate) -> Factor {
    match date.month() {
        6 | 7 | 8 | 12 => 1.1,
        _ => 1.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffingFactors {
    pub occupancy_factor: Factor,
    pub event_factor:     Factor,
    pub weekend_factor:   Factor,
    pub seasonal_factor:  Factor,
}

impl StaffingFactors {
    pub fn rounded(&self) -> Self {
        Self {
            occupancy_factor: round2(self.occupancy_factor),
            event_factor:     round2(self.event_factor),
            weekend_factor:   round2(self.weekend_factor),
            seasonal_factor:  round2(self.seasonal_factor),
        }
    }
}

struct DayFactors {
    occupancy:       Factor,
    daily_occupancy: Factor,
    event:           Factor,
    weekend:         Factor,
    seasonal:        Factor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingDay {
    pub date:        NaiveDate,
    pub staffing:    Staffing,
    pub total_staff: u32,
    /// Names of location-matched events on this date.
    pub events:      Vec<String>,
    pub daily_cost:  f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingPlan {
    pub base_staffing:     Staffing,
    /// Factors for the query date; unrounded.
    pub factors:           StaffingFactors,
    pub forecast:          Vec<StaffingDay>,
    pub total_weekly_cost: f64,
}

pub struct StaffingEngine<'a> {
    store:       &'a DataStore,
    rates:       &'a HourlyRates,
    shift_hours: f64,
}

impl<'a> StaffingEngine<'a> {
    pub fn new(store: &'a DataStore, rates: &'a HourlyRates, shift_hours: f64) -> Self {
        Self { store, rates, shift_hours }
    }

    /// Factors for a single date. Events are restricted to `date` when one
    /// is given; the calendar factors use `date` or today.
    pub fn factors_for(
        &self,
        hotel: &Hotel,
        date: Option<NaiveDate>,
        clock: &ForecastClock,
    ) -> StaffingFactors {
        let bookings = self.store.bookings_for(&hotel.hotel_id);
        let events = self.store.events_at(&hotel.location_key(), date);
        let day = clock.resolve(date);
        StaffingFactors {
            occupancy_factor: occupancy_factor(&bookings, hotel.rooms),
            event_factor:     event_factor(&events),
            weekend_factor:   weekend_factor(day),
            seasonal_factor:  seasonal_factor(day),
        }
    }

    pub fn calculate_staffing(
        &self,
        hotel: &Hotel,
        date: Option<NaiveDate>,
        clock: &ForecastClock,
        rng: &mut StreamRng,
    ) -> StaffingPlan {
        let base = base_staffing(hotel.rooms);
        let factors = self.factors_for(hotel, date, clock);
        let location = hotel.location_key();

        let forecast: Vec<StaffingDay> = clock
            .horizon()
            .into_iter()
            .map(|day| {
                let events = self.store.events_at(&location, Some(day));
                let day_factors = DayFactors {
                    occupancy:       factors.occupancy_factor,
                    daily_occupancy: factors.occupancy_factor
                        * rng.uniform(OCCUPANCY_JITTER.0, OCCUPANCY_JITTER.1),
                    event:           event_factor(&events),
                    weekend:         weekend_factor(day),
                    seasonal:        seasonal_factor(day),
                };

                let mut staffing = Staffing::default();
                for department in Department::ALL {
                    let raw = round_count(base.get(department) as f64 * department.multiplier(&day_factors));
                    let staff = department.forecast_floor().map_or(raw, |floor| raw.max(floor));
                    staffing.set(department, staff);
                }

                StaffingDay {
                    date: day,
                    total_staff: staffing.total(),
                    events: events.iter().map(|e| e.name.clone()).collect(),
                    daily_cost: self.daily_cost(&staffing),
                    staffing,
                }
            })
            .collect();

        let total_weekly_cost = forecast.iter().map(|d| d.daily_cost).sum();
        log::debug!(
            "staffing: {} factors={:?} weekly_cost={total_weekly_cost:.2}",
            hotel.hotel_id, factors
        );

        StaffingPlan { base_staffing: base, factors, forecast, total_weekly_cost }
    }

    /// Σ staff × hourly rate × shift length.
    pub fn daily_cost(&self, staffing: &Staffing) -> f64 {
        Department::ALL
            .iter()
            .map(|d| staffing.get(*d) as f64 * self.rates.rate(*d) * self.shift_hours)
            .sum()
    }
}
