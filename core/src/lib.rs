//! Hotel dynamic-pricing and staffing recommendation engine.
//!
//! Everything hangs off [`engine::OptimizerEngine`], which owns the
//! in-memory data store, the forecast clock and the seeded RNG streams.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod explanation;
pub mod mock_data;
pub mod name_generator;
pub mod pricing;
pub mod rng;
pub mod staffing;
pub mod store;
pub mod types;
