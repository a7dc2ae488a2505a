//! Per-instrument locking variant
//!
//! Instruments never interact, so each one gets its own lock. Submissions
//! to different instruments proceed in parallel; a matching pass takes the
//! instrument locks one at a time in index order and never holds two.

use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};
use types::ids::InstrumentId;
use types::order::Side;

use crate::book::{validate_submission, InstrumentBook, InstrumentSnapshot};
use crate::config::{ConfigError, EngineConfig};
use crate::error::EngineError;
use crate::events::TradeSink;
use crate::guard::ConcurrencyGuard;
use crate::matching::executor::SharedSequencer;
use crate::matching::{match_instrument, MatchOutcome};
use crate::stats::{EngineStats, StatsSnapshot};
use crate::venue::Venue;

/// Matching engine with one lock per instrument
pub struct ShardedMatchingEngine {
    shards: Vec<ConcurrencyGuard<InstrumentBook>>,
    /// Shared across shards; trades on different instruments interleave
    sequence: AtomicU64,
    stats: EngineStats,
}

impl ShardedMatchingEngine {
    pub fn new(instrument_count: usize, starting_sequence: u64) -> Self {
        info!(
            instrument_count,
            starting_sequence,
            lock_mode = "per_instrument",
            "MatchingEngine initialized"
        );

        Self {
            shards: (0..instrument_count)
                .map(|_| ConcurrencyGuard::new(InstrumentBook::new()))
                .collect(),
            sequence: AtomicU64::new(starting_sequence),
            stats: EngineStats::new(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.instrument_count, config.starting_sequence))
    }

    /// Sequence number the next trade will receive
    pub fn next_sequence(&self) -> u64 {
        self.sequence.load(Ordering::Relaxed)
    }
}

impl Venue for ShardedMatchingEngine {
    fn submit(
        &self,
        side: Side,
        instrument: InstrumentId,
        quantity: i64,
        price: Decimal,
    ) -> Result<(), EngineError> {
        match validate_submission(instrument, self.shards.len(), quantity, price) {
            Ok((index, order)) => {
                self.shards[index].with(|book| book.insert(side, order));
                self.stats.record_accepted();
                debug!(?side, instrument = index, quantity, %price, "Order accepted");
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
        let mut sequencer = SharedSequencer(&self.sequence);
        let mut outcome = MatchOutcome::default();

        for (index, shard) in self.shards.iter().enumerate() {
            let instrument = InstrumentId::new(index);
            let pass = shard.with(|book| {
                match_instrument(instrument, book, &mut sequencer, &mut *sink)
            });
            outcome.absorb(pass);
        }

        self.stats.record_match(outcome);
        if outcome.trades > 0 {
            debug!(trades = outcome.trades, quantity = outcome.quantity, "Matching pass complete");
        }
        outcome.trades
    }

    fn snapshot(&self, instrument: InstrumentId) -> Result<InstrumentSnapshot, EngineError> {
        let index = instrument.checked_index(self.shards.len())?;
        Ok(self.shards[index].with(|book| book.snapshot(instrument)))
    }

    fn open_order_count(&self) -> usize {
        self.shards
            .iter()
            .map(|shard| shard.with(|book| book.order_count()))
            .sum()
    }

    fn instrument_count(&self) -> usize {
        self.shards.len()
    }

    fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
