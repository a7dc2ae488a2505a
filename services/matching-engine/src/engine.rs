//! Matching engine core
//!
//! Main coordinator for the order book and matching logic. A single
//! exclusive lock covers the whole book, so submissions and matching passes
//! observe one total order.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use types::ids::InstrumentId;
use types::order::Side;

use crate::book::{InstrumentSnapshot, OrderBook};
use crate::config::{ConfigError, EngineConfig};
use crate::error::EngineError;
use crate::events::TradeSink;
use crate::guard::ConcurrencyGuard;
use crate::matching::{match_book, MatchExecutor};
use crate::stats::{EngineStats, StatsSnapshot};
use crate::venue::Venue;

/// State protected by the engine lock
struct EngineState {
    book: OrderBook,
    /// Trade executor with sequence generation
    executor: MatchExecutor,
}

/// Main matching engine
pub struct MatchingEngine {
    state: ConcurrencyGuard<EngineState>,
    instrument_count: usize,
    stats: EngineStats,
}

impl MatchingEngine {
    /// Create a new matching engine with `instrument_count` slots and
    /// starting trade sequence
    pub fn new(instrument_count: usize, starting_sequence: u64) -> Self {
        info!(
            instrument_count,
            starting_sequence,
            lock_mode = "global",
            "MatchingEngine initialized"
        );

        Self {
            state: ConcurrencyGuard::new(EngineState {
                book: OrderBook::new(instrument_count),
                executor: MatchExecutor::new(starting_sequence),
            }),
            instrument_count,
            stats: EngineStats::new(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.instrument_count, config.starting_sequence))
    }

    /// Sequence number the next trade will receive
    pub fn next_sequence(&self) -> u64 {
        self.state.with(|state| state.executor.peek_sequence())
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self::new(config.instrument_count, config.starting_sequence)
    }
}

impl Venue for MatchingEngine {
    fn submit(
        &self,
        side: Side,
        instrument: InstrumentId,
        quantity: i64,
        price: Decimal,
    ) -> Result<(), EngineError> {
        let result = self
            .state
            .with(|state| state.book.submit(side, instrument, quantity, price));

        match result {
            Ok(()) => {
                self.stats.record_accepted();
                debug!(?side, instrument = instrument.index(), quantity, %price, "Order accepted");
                Ok(())
            }
            Err(err) => {
                self.stats.record_rejected();
                warn!(
                    ?side,
                    instrument = instrument.index(),
                    quantity,
                    %price,
                    error = %err,
                    "Order rejected"
                );
                Err(err.into())
            }
        }
    }

    fn run_with(&self, sink: &mut dyn TradeSink) -> usize {
        let outcome = self.state.with(|state| {
            let EngineState { book, executor } = state;
            match_book(book, executor, sink)
        });

        self.stats.record_match(outcome);
        if outcome.trades > 0 {
            debug!(trades = outcome.trades, quantity = outcome.quantity, "Matching pass complete");
        }
        outcome.trades
    }

    fn snapshot(&self, instrument: InstrumentId) -> Result<InstrumentSnapshot, EngineError> {
        self.state.with(|state| -> Result<InstrumentSnapshot, EngineError> {
            let book = state.book.instrument(instrument)?;
            Ok(book.snapshot(instrument))
        })
    }

    fn open_order_count(&self) -> usize {
        self.state.with(|state| state.book.open_order_count())
    }

    fn instrument_count(&self) -> usize {
        self.instrument_count
    }

    fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
