//! Simulation configuration
//!
//! Defaults reproduce a single random trader: quantities 1 to 100, prices
//! 10.00 to 400.00 at two decimal places, 1024 instruments, matching after
//! every submission with a 10 to 100 ms pause between orders.

use matching_engine::EngineConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SimulationError;

/// Finest price granularity generated orders may use
pub const MAX_PRICE_SCALE: u32 = 8;

/// When matching passes are triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MatchMode {
    /// Each worker calls `run` right after each of its submissions
    AfterEachSubmit,
    /// A dedicated thread calls `run` every `interval_ms`
    Periodic { interval_ms: u64 },
}

/// Bounds for randomly generated orders
///
/// Prices are written as JSON strings, e.g. `"10.00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRanges {
    pub min_quantity: i64,
    pub max_quantity: i64,
    pub min_price: Decimal,
    pub max_price: Decimal,
    /// Decimal places of generated prices
    pub price_scale: u32,
}

impl Default for OrderRanges {
    fn default() -> Self {
        Self {
            min_quantity: 1,
            max_quantity: 100,
            min_price: Decimal::from(10),
            max_price: Decimal::from(400),
            price_scale: 2,
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Base RNG seed; worker `i` uses `seed + i`.
    pub seed: u64,
    /// Number of concurrent order sources.
    pub workers: usize,
    /// Orders each worker submits before stopping.
    pub orders_per_worker: usize,
    pub orders: OrderRanges,
    /// Pause between a worker's submissions, drawn uniformly.
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub match_mode: MatchMode,
    pub engine: EngineConfig,
    /// Write the JSON export here when set.
    pub export_path: Option<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            workers: 1,
            orders_per_worker: 1_000,
            orders: OrderRanges::default(),
            min_delay_ms: 10,
            max_delay_ms: 100,
            match_mode: MatchMode::AfterEachSubmit,
            engine: EngineConfig::default(),
            export_path: None,
        }
    }
}

impl SimulationConfig {
    /// Same run without any pauses; used for tests and benchmarks
    pub fn without_delay(mut self) -> Self {
        self.min_delay_ms = 0;
        self.max_delay_ms = 0;
        self
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.workers == 0 {
            return Err(SimulationError::InvalidConfig("workers must be at least 1".into()));
        }
        let o = &self.orders;
        if o.min_quantity < 1 || o.min_quantity > o.max_quantity {
            return Err(SimulationError::InvalidConfig(format!(
                "quantity range [{}, {}] must be positive and non-empty",
                o.min_quantity, o.max_quantity
            )));
        }
        if o.min_price <= Decimal::ZERO || o.min_price > o.max_price {
            return Err(SimulationError::InvalidConfig(format!(
                "price range [{}, {}] must be positive and non-empty",
                o.min_price, o.max_price
            )));
        }
        if o.price_scale > MAX_PRICE_SCALE {
            return Err(SimulationError::InvalidConfig(format!(
                "price_scale {} exceeds {} decimal places",
                o.price_scale, MAX_PRICE_SCALE
            )));
        }
        if self.min_delay_ms > self.max_delay_ms {
            return Err(SimulationError::InvalidConfig(format!(
                "delay range [{}, {}] is empty",
                self.min_delay_ms, self.max_delay_ms
            )));
        }
        self.engine.validate()?;
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matching_engine::LockMode;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.engine.instrument_count, 1024);
        assert_eq!(config.orders.max_quantity, 100);
    }

    #[test]
    fn test_partial_json() {
        let config = SimulationConfig::from_json_str(
            r#"{
                "workers": 4,
                "match_mode": {"mode": "periodic", "interval_ms": 5},
                "engine": {"lock_mode": "per_instrument", "instrument_count": 64}
            }"#,
        )
        .unwrap();

        assert_eq!(config.workers, 4);
        assert_eq!(config.match_mode, MatchMode::Periodic { interval_ms: 5 });
        assert_eq!(config.engine.lock_mode, LockMode::PerInstrument);
        assert_eq!(config.engine.instrument_count, 64);
        assert_eq!(config.orders, OrderRanges::default());
    }

    #[test]
    fn test_rejects_bad_ranges() {
        let mut config = SimulationConfig::default();
        config.orders.min_quantity = 0;
        assert!(matches!(config.validate(), Err(SimulationError::InvalidConfig(_))));

        let mut config = SimulationConfig::default();
        config.orders.min_price = Decimal::from(500);
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.workers = 0;
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.engine.instrument_count = 0;
        assert!(matches!(config.validate(), Err(SimulationError::Engine(_))));
    }
}
