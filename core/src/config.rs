use crate::staffing::Department;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sizes used when synthesizing a fresh data set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    pub hotel_count:        usize,
    pub bookings_per_hotel: usize,
    pub event_count:        usize,
    /// Bookings and events are dated within today..=today+lookahead.
    pub lookahead_days:     u32,
    pub min_rooms:          u32,
    pub max_rooms:          u32,
    pub min_attendance:     u32,
    pub max_attendance:     u32,
    pub min_competitor_price: f64,
    pub max_competitor_price: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            hotel_count:          300,
            bookings_per_hotel:   30,
            event_count:          50,
            lookahead_days:       30,
            min_rooms:            50,
            max_rooms:            500,
            min_attendance:       500,
            max_attendance:       5000,
            min_competitor_price: 80.0,
            max_competitor_price: 500.0,
        }
    }
}

/// Hourly wage per department, in whole currency units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HourlyRates {
    pub front_desk:   f64,
    pub housekeeping: f64,
    pub concierge:    f64,
    pub restaurant:   f64,
    pub maintenance:  f64,
}

impl Default for HourlyRates {
    fn default() -> Self {
        Self {
            front_desk:   18.0,
            housekeeping: 15.0,
            concierge:    22.0,
            restaurant:   17.0,
            maintenance:  20.0,
        }
    }
}

impl HourlyRates {
    pub fn rate(&self, department: Department) -> f64 {
        match department {
            Department::FrontDesk    => self.front_desk,
            Department::Housekeeping => self.housekeeping,
            Department::Concierge    => self.concierge,
            Department::Restaurant   => self.restaurant,
            Department::Maintenance  => self.maintenance,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Master seed for every RNG stream. `None` lets the caller pick one.
    pub seed:         Option<u64>,
    pub generation:   GenerationConfig,
    pub hourly_rates: HourlyRates,
    pub shift_hours:  f64,
    /// How many hotels the dashboard summary samples.
    pub summary_sample_size: usize,
    /// How many nearby events a pricing report lists.
    pub report_event_limit:  usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            seed:                None,
            generation:          GenerationConfig::default(),
            hourly_rates:        HourlyRates::default(),
            shift_hours:         8.0,
            summary_sample_size: 10,
            report_event_limit:  3,
        }
    }
}

impl OptimizerConfig {
    /// Load from a JSON file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: OptimizerConfig = serde_json::from_str(&content)?;
        anyhow::ensure!(config.shift_hours > 0.0, "shift_hours must be positive");
        anyhow::ensure!(
            config.generation.min_rooms > 0
                && config.generation.min_rooms <= config.generation.max_rooms,
            "room range {}..={} is invalid",
            config.generation.min_rooms,
            config.generation.max_rooms
        );
        Ok(config)
    }

    /// Small, seeded configuration for tests.
    pub fn default_test() -> Self {
        Self {
            seed: Some(42),
            generation: GenerationConfig {
                hotel_count:        20,
                bookings_per_hotel: 10,
                event_count:        8,
                ..GenerationConfig::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: OptimizerConfig =
            serde_json::from_str(r#"{ "seed": 5, "hourly_rates": { "concierge": 30.0 } }"#).unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.hourly_rates.concierge, 30.0);
        assert_eq!(config.hourly_rates.front_desk, 18.0);
        assert_eq!(config.generation.hotel_count, 300);
        assert_eq!(config.shift_hours, 8.0);
    }
}
