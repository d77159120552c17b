//! Engine-level queries: summary, event listing, location diagnostics.

use chrono::{Duration, NaiveDate};
use hotel_optimizer_core::{
    clock::ForecastClock,
    config::OptimizerConfig,
    engine::OptimizerEngine,
    error::OptimizerError,
    store::{Country, DataStore, Event, Hotel},
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

fn hotel(id: &str, location: &str, country: Country, rooms: u32) -> Hotel {
    Hotel {
        hotel_id: id.into(),
        name: format!("{id} Hotel"),
        location: location.into(),
        country,
        rooms,
        rating: 4.0,
    }
}

fn event(id: &str, location: &str, offset: i64) -> Event {
    Event {
        event_id: id.into(),
        name: format!("Festival in {location}"),
        date: today() + Duration::days(offset),
        location: location.into(),
        expected_attendance: 1200,
    }
}

fn engine() -> OptimizerEngine {
    let store = DataStore::new(
        vec![
            hotel("HOTEL0001", "Ashford", Country::Usa, 100),
            hotel("HOTEL0002", "Kingsport", Country::Japan, 200),
            hotel("HOTEL0003", "Westfield", Country::Usa, 300),
        ],
        vec![],
        vec![
            event("EVENT1001", "ashford", 0),
            event("EVENT1002", "Ashford", 6),
            event("EVENT1003", "Kingsport", 7),
            event("EVENT1004", "Lakewood", 2),
        ],
        vec![],
    );
    OptimizerEngine::new(OptimizerConfig::default_test(), ForecastClock::fixed(today()), store, 42)
}

#[test]
fn summary_counts_the_portfolio() {
    let mut engine = engine();
    let summary = engine.summary();

    assert_eq!(summary.hotel_count, 3);
    assert_eq!(summary.country_count, 2);
    assert_eq!(summary.total_rooms, 600);
    // Sample size exceeds the portfolio, so every hotel appears once.
    let mut ids: Vec<&str> = summary.hotels.iter().map(|h| h.hotel_id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["HOTEL0001", "HOTEL0002", "HOTEL0003"]);
}

#[test]
fn summary_sample_is_capped() {
    let mut config = OptimizerConfig::default_test();
    config.summary_sample_size = 2;
    let store = engine().store().clone();
    let mut engine = OptimizerEngine::new(config, ForecastClock::fixed(today()), store, 7);

    let summary = engine.summary();
    assert_eq!(summary.hotels.len(), 2);
    assert_ne!(summary.hotels[0].hotel_id, summary.hotels[1].hotel_id);
}

#[test]
fn hotels_with_events_only_counts_the_horizon() {
    let with_events = engine().hotels_with_events();

    assert_eq!(with_events.len(), 1);
    let entry = &with_events[0];
    assert_eq!(entry.hotel.hotel_id, "HOTEL0001");
    assert_eq!(entry.event_count, 2);
    let ids: Vec<&str> = entry.events.iter().map(|e| e.event_id.as_str()).collect();
    assert_eq!(ids, vec!["EVENT1001", "EVENT1002"]);
}

#[test]
fn location_report_lists_matches() {
    let report = engine().location_report();

    assert_eq!(report.hotel_locations, vec!["Ashford", "Kingsport", "Westfield"]);
    assert_eq!(report.event_locations, vec!["Ashford", "Kingsport", "Lakewood", "ashford"]);
    assert_eq!(report.matching_locations, vec!["Ashford", "Kingsport"]);
    assert_eq!(report.event_dates.len(), 4);
    assert_eq!(report.current_date, today());
    assert_eq!(report.upcoming_dates.len(), 7);
    assert_eq!(report.upcoming_dates[0], today());
}

#[test]
fn default_hotel_is_the_first_one() {
    assert_eq!(engine().default_hotel_id().unwrap(), "HOTEL0001");
}

#[test]
fn empty_store_has_no_default_hotel() {
    let mut engine = OptimizerEngine::new(
        OptimizerConfig::default_test(),
        ForecastClock::fixed(today()),
        DataStore::default(),
        1,
    );
    assert!(matches!(engine.default_hotel_id(), Err(OptimizerError::NoHotels)));
    let summary = engine.summary();
    assert_eq!(summary.hotel_count, 0);
    assert_eq!(summary.total_rooms, 0);
    assert!(summary.hotels.is_empty());
    assert!(engine.hotels_with_events().is_empty());
}

#[test]
fn bad_hotel_id_is_reported_by_name() {
    let mut engine = engine();
    let err = engine.pricing_report("HOTEL9999", None).unwrap_err();
    assert!(matches!(err, OptimizerError::HotelNotFound { ref hotel_id } if hotel_id == "HOTEL9999"));
    assert!(engine.staffing_report("HOTEL9999", None).is_err());
    assert!(engine.price_forecast("HOTEL9999").is_err());
}

#[test]
fn reports_serialize_with_snake_case_keys() {
    let mut engine = engine();
    let report = engine.staffing_report("HOTEL0002", None).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["hotel_id"], "HOTEL0002");
    assert!(json["base_staffing"]["front_desk"].is_u64());
    assert_eq!(json["forecast"].as_array().unwrap().len(), 7);
    assert!(json["staffing_factors"]["weekend_factor"].is_f64());
}

#[test]
fn build_test_engine_is_usable() {
    let mut engine = OptimizerEngine::build_test(42);
    assert_eq!(engine.store().hotels.len(), 20);
    let hotel_id = engine.default_hotel_id().unwrap().to_string();
    let report = engine.pricing_report(&hotel_id, None).unwrap();
    assert!(report.dynamic_price > 0.0);
    assert_eq!(report.price_forecast.len(), 7);
}
