//! Venue interface
//!
//! The public boundary shared by every locking strategy. Order sources and
//! trade sinks talk to a `Venue` and never to the queues directly.

use rust_decimal::Decimal;
use std::sync::Arc;
use types::ids::InstrumentId;
use types::order::Side;
use types::trade::Trade;

use crate::book::InstrumentSnapshot;
use crate::config::{ConfigError, EngineConfig, LockMode};
use crate::engine::MatchingEngine;
use crate::error::EngineError;
use crate::events::TradeSink;
use crate::sharded::ShardedMatchingEngine;
use crate::stats::StatsSnapshot;

/// Order submission and matching
pub trait Venue: Send + Sync {
    /// Append an order to the tail of its side's queue
    ///
    /// Fails with `EngineError::InvalidOrder` on an out-of-range instrument
    /// or a non-positive quantity or price; the book is left untouched.
    fn submit(
        &self,
        side: Side,
        instrument: InstrumentId,
        quantity: i64,
        price: Decimal,
    ) -> Result<(), EngineError>;

    /// Run one matching pass, delivering trades to `sink` in emission order
    ///
    /// Returns the number of trades emitted.
    fn run_with(&self, sink: &mut dyn TradeSink) -> usize;

    /// Run one matching pass and collect the trades
    fn run(&self) -> Vec<Trade> {
        let mut trades = Vec::new();
        self.run_with(&mut trades);
        trades
    }

    /// Copy of one instrument's queues, head first
    fn snapshot(&self, instrument: InstrumentId) -> Result<InstrumentSnapshot, EngineError>;

    /// Total open orders across all instruments
    fn open_order_count(&self) -> usize;

    /// Number of instrument slots
    fn instrument_count(&self) -> usize;

    fn stats(&self) -> StatsSnapshot;
}

/// Build the engine selected by `config.lock_mode`
pub fn build_venue(config: &EngineConfig) -> Result<Arc<dyn Venue>, ConfigError> {
    let venue: Arc<dyn Venue> = match config.lock_mode {
        LockMode::Global => Arc::new(MatchingEngine::from_config(config)?),
        LockMode::PerInstrument => Arc::new(ShardedMatchingEngine::from_config(config)?),
    };
    Ok(venue)
}
