//! Staffing pipeline tests.

use chrono::{Duration, NaiveDate};
use hotel_optimizer_core::{
    clock::ForecastClock,
    config::{HourlyRates, OptimizerConfig},
    engine::OptimizerEngine,
    error::OptimizerError,
    rng::{RngBank, StreamSlot},
    staffing::{self, Department, Staffing, StaffingEngine},
    store::{Booking, Country, DataStore, Event, Hotel},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn hotel(id: &str, location: &str, rooms: u32) -> Hotel {
    Hotel {
        hotel_id: id.into(),
        name:     format!("{id} Hotel"),
        location: location.into(),
        country:  Country::Japan,
        rooms,
        rating:   4.0,
    }
}

fn event(location: &str, on: NaiveDate, attendance: u32) -> Event {
    Event {
        event_id:            "EVENT4321".into(),
        name:                format!("Concert in {location}"),
        date:                on,
        location:            location.into(),
        expected_attendance: attendance,
    }
}

#[test]
fn base_staffing_for_two_hundred_rooms() {
    assert_eq!(
        staffing::base_staffing(200),
        Staffing { front_desk: 3, housekeeping: 13, concierge: 1, restaurant: 4, maintenance: 2 }
    );
}

#[test]
fn occupancy_factor_is_neutral_without_bookings() {
    assert_eq!(staffing::occupancy_factor(&[], 200), 1.0);
}

#[test]
fn occupancy_factor_scales_and_caps() {
    let on = date(2025, 5, 5);
    let half = [Booking { hotel_id: "H".into(), date: on, bookings: 100 }];
    let refs: Vec<&Booking> = half.iter().collect();
    assert!((staffing::occupancy_factor(&refs, 200) - 1.0).abs() < 1e-12);

    let overbooked = [Booking { hotel_id: "H".into(), date: on, bookings: 900 }];
    let refs: Vec<&Booking> = overbooked.iter().collect();
    assert!((staffing::occupancy_factor(&refs, 200) - 1.3).abs() < 1e-12);
}

#[test]
fn event_factor_is_monotone_and_caps_at_one_and_a_half() {
    let on = date(2025, 5, 5);
    assert_eq!(staffing::event_factor(&[]), 1.0);

    let mut previous = 1.0;
    for attendance in (250..=20_000).step_by(250) {
        let events = [event("Oakridge", on, attendance)];
        let refs: Vec<&Event> = events.iter().collect();
        let factor = staffing::event_factor(&refs);
        assert!(factor >= previous, "factor fell at attendance {attendance}");
        assert!(factor > 1.15 && factor <= 1.5 + 1e-12);
        if attendance >= 5_250 {
            assert!((factor - 1.5).abs() < 1e-12);
        }
        previous = factor;
    }
}

#[test]
fn department_floors_hold_for_every_forecast_day() {
    for seed in [1, 7, 42, 1_000, 0xBEEF] {
        let mut engine = OptimizerEngine::build_test(seed);
        let ids: Vec<String> = engine.store().hotels.iter().map(|h| h.hotel_id.clone()).collect();
        for id in ids {
            let report = engine.staffing_report(&id, None).unwrap();
            assert_eq!(report.forecast.len(), 7);
            for day in &report.forecast {
                for department in Department::ALL {
                    if let Some(floor) = department.forecast_floor() {
                        assert!(
                            day.staffing.get(department) >= floor,
                            "{id} {} {}: {} below floor {floor}",
                            day.date,
                            department.name(),
                            day.staffing.get(department)
                        );
                    }
                }
                assert_eq!(day.total_staff, day.staffing.total());
            }
        }
    }
}

#[test]
fn small_hotel_is_floored_even_when_quiet() {
    let today = date(2025, 3, 3); // Monday, low season
    let store = DataStore::new(vec![hotel("HOTEL0001", "Elmwood", 50)], vec![], vec![], vec![]);
    let rates = HourlyRates::default();
    let mut rng = RngBank::new(4).for_stream(StreamSlot::Staffing);
    let hotel = store.hotel("HOTEL0001").unwrap();

    let plan = StaffingEngine::new(&store, &rates, 8.0).calculate_staffing(
        hotel,
        None,
        &ForecastClock::fixed(today),
        &mut rng,
    );

    let monday = &plan.forecast[0];
    assert_eq!(monday.date, today);
    // maintenance: 2 * 0.95 rounds to 2; concierge: 1 * 1.2 rounds to 1.
    assert_eq!(monday.staffing.maintenance, 2);
    assert_eq!(monday.staffing.concierge, 1);
    assert_eq!(monday.staffing.front_desk, 2);
    // housekeeping: 5 * occupancy jitter * 1.1 lands on 5 or 6.
    assert!((5..=6).contains(&monday.staffing.housekeeping));
    assert!(monday.events.is_empty());
}

#[test]
fn costs_follow_rate_table_and_shift_length() {
    let today = date(2025, 8, 1);
    let store = DataStore::new(vec![hotel("HOTEL0001", "Elmwood", 320)], vec![], vec![], vec![]);
    let rates = HourlyRates::default();
    let mut rng = RngBank::new(5).for_stream(StreamSlot::Staffing);
    let hotel = store.hotel("HOTEL0001").unwrap();
    let engine = StaffingEngine::new(&store, &rates, 8.0);

    let plan = engine.calculate_staffing(hotel, None, &ForecastClock::fixed(today), &mut rng);

    let mut weekly = 0.0;
    for day in &plan.forecast {
        let s = &day.staffing;
        let expected = (s.front_desk as f64 * 18.0
            + s.housekeeping as f64 * 15.0
            + s.concierge as f64 * 22.0
            + s.restaurant as f64 * 17.0
            + s.maintenance as f64 * 20.0)
            * 8.0;
        assert!((day.daily_cost - expected).abs() < 1e-9);
        weekly += day.daily_cost;
    }
    assert!((plan.total_weekly_cost - weekly).abs() < 1e-9);
}

#[test]
fn forecast_days_pick_up_that_days_events_and_weekends() {
    let today = date(2025, 3, 5); // Wednesday
    let friday = today + Duration::days(2);
    let store = DataStore::new(
        vec![hotel("HOTEL0001", "Cedar Falls", 300)],
        vec![],
        vec![event("Cedar Falls", friday, 6_000), event("Pine Bluff", today, 6_000)],
        vec![],
    );
    let mut engine =
        OptimizerEngine::new(OptimizerConfig::default_test(), ForecastClock::fixed(today), store, 11);

    let report = engine.staffing_report("HOTEL0001", None).unwrap();

    assert!(report.forecast[0].events.is_empty());
    assert_eq!(report.forecast[2].date, friday);
    assert_eq!(report.forecast[2].events, vec!["Concert in Cedar Falls".to_string()]);
    // Concierge on Wednesday: 2 * 1.0 * 1.0 * 1.2 = 2.4 -> 2.
    // Concierge on Friday:    2 * 1.5 * 1.15 * 1.2 = 4.14 -> 4.
    assert_eq!(report.forecast[0].staffing.concierge, 2);
    assert_eq!(report.forecast[2].staffing.concierge, 4);

    // No query date: every event at the location counts; today is a
    // midweek March day.
    assert_eq!(report.staffing_factors.event_factor, 1.5);
    assert_eq!(report.staffing_factors.weekend_factor, 1.0);
    assert_eq!(report.staffing_factors.seasonal_factor, 1.0);
    assert_eq!(report.staffing_factors.occupancy_factor, 1.0);
    assert_eq!(
        report.explanation,
        "Staffing recommendations for HOTEL0001 Hotel are based on: \
         increased demand due to local events."
    );
}

#[test]
fn staffing_forecast_starts_today() {
    let mut engine = OptimizerEngine::build_test(3);
    let id = engine.default_hotel_id().unwrap().to_string();
    let report = engine.staffing_report(&id, None).unwrap();

    let today = engine.clock.today;
    for (offset, day) in report.forecast.iter().enumerate() {
        assert_eq!(day.date, today + Duration::days(offset as i64));
    }
}

#[test]
fn unknown_hotel_is_not_found() {
    let mut engine = OptimizerEngine::build_test(42);
    assert!(matches!(
        engine.staffing_report("NOPE", None),
        Err(OptimizerError::HotelNotFound { .. })
    ));
}

#[test]
fn dated_query_only_counts_that_days_events() {
    let today = date(2025, 6, 6); // Friday in June
    let store = DataStore::new(
        vec![hotel("HOTEL0001", "Summit City", 150)],
        vec![],
        vec![event("Summit City", today + Duration::days(3), 3_000)],
        vec![],
    );
    let mut engine =
        OptimizerEngine::new(OptimizerConfig::default_test(), ForecastClock::fixed(today), store, 12);

    let report = engine.staffing_report("HOTEL0001", Some(today)).unwrap();

    assert_eq!(report.staffing_factors.event_factor, 1.0);
    assert_eq!(report.staffing_factors.weekend_factor, 1.15);
    assert_eq!(report.staffing_factors.seasonal_factor, 1.1);
    assert!(report.explanation.contains("weekend staffing requirements"));
}
