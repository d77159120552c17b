//! Forecast clock. Owns "today" and the fixed 7-day horizon.

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Every forecast covers exactly this many consecutive days.
pub const FORECAST_DAYS: usize = 7;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastClock {
    pub today: NaiveDate,
}

impl ForecastClock {
    /// Clock pinned to the local calendar date.
    pub fn system() -> Self {
        Self { today: Local::now().date_naive() }
    }

    /// Clock pinned to a fixed date (tests, replays).
    pub fn fixed(today: NaiveDate) -> Self {
        Self { today }
    }

    /// The target date, or today when the caller gave none.
    pub fn resolve(&self, date: Option<NaiveDate>) -> NaiveDate {
        date.unwrap_or(self.today)
    }

    /// Today plus `offset` days.
    pub fn day(&self, offset: usize) -> NaiveDate {
        self.today + Duration::days(offset as i64)
    }

    /// The forecast horizon: today and the following six days.
    pub fn horizon(&self) -> Vec<NaiveDate> {
        (0..FORECAST_DAYS).map(|offset| self.day(offset)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_is_seven_consecutive_days() {
        let start = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
        let days = ForecastClock::fixed(start).horizon();
        assert_eq!(days.len(), FORECAST_DAYS);
        assert_eq!(days[0], start);
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        assert_eq!(days[6], NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
    }
}
