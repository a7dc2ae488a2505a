//! Order flow simulation for the matching engine
//!
//! Random order sources and trade sinks that sit outside the engine and
//! only use its public `Venue` operations.
//!
//! # Modules
//! - `config`: Run configuration with JSON loading
//! - `bots`: Seeded random trader
//! - `driver`: Multi-threaded run loop
//! - `reports`: Console reporter and trade tally sinks
//! - `metrics`: Order, trade and throughput counters
//! - `export`: Metrics and report JSON export

pub mod config;
pub mod bots;
pub mod driver;
pub mod reports;
pub mod metrics;
pub mod export;
pub mod error;

pub use config::{MatchMode, OrderRanges, SimulationConfig};
pub use driver::{Simulation, SimulationOutcome};
pub use error::SimulationError;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
