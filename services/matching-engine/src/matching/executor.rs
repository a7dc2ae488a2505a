//! Trade execution logic
//!
//! Walks each instrument's head pair, emitting fills until the heads no
//! longer cross or one side runs dry.

use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;
use types::ids::InstrumentId;
use types::trade::Trade;

use super::crossing;
use crate::book::{InstrumentBook, OrderBook};
use crate::events::TradeSink;

/// Source of trade sequence numbers
pub trait TradeSequencer {
    /// Get next sequence number (monotonically increasing)
    fn next_sequence(&mut self) -> u64;
}

/// Match executor owning a plain sequence counter
///
/// Used where the counter is already protected by the book's lock.
#[derive(Debug, Clone)]
pub struct MatchExecutor {
    sequence_counter: u64,
}

impl MatchExecutor {
    /// Create a new match executor with starting sequence number
    pub fn new(starting_sequence: u64) -> Self {
        Self {
            sequence_counter: starting_sequence,
        }
    }

    /// Sequence the next trade will receive
    pub fn peek_sequence(&self) -> u64 {
        self.sequence_counter
    }
}

impl TradeSequencer for MatchExecutor {
    fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence_counter;
        self.sequence_counter += 1;
        seq
    }
}

/// Sequencer over a counter shared by independently locked shards
pub struct SharedSequencer<'a>(pub &'a AtomicU64);

impl TradeSequencer for SharedSequencer<'_> {
    fn next_sequence(&mut self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

/// Totals for one matching pass
///
/// Quantities saturate at `u64::MAX`; a few fills near the `i64` limit
/// already exceed it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub trades: usize,
    pub quantity: u64,
}

impl MatchOutcome {
    fn record_fill(&mut self, quantity: u64) {
        self.trades += 1;
        self.quantity = self.quantity.saturating_add(quantity);
    }

    /// Fold another pass's totals into this one
    pub fn absorb(&mut self, other: MatchOutcome) {
        self.trades += other.trades;
        self.quantity = self.quantity.saturating_add(other.quantity);
    }
}

/// Match one instrument until its heads stop crossing
///
/// Heads are considered strictly in FIFO order. Once the head buy is priced
/// below the head sell the instrument is done for this pass, even if a later
/// order on either side would cross.
pub fn match_instrument<S: TradeSequencer + ?Sized>(
    instrument: InstrumentId,
    book: &mut InstrumentBook,
    sequencer: &mut S,
    sink: &mut dyn TradeSink,
) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();

    while let Some((buy, sell)) = book.heads() {
        if !crossing::can_match(buy.price, sell.price) {
            break;
        }

        let fill = buy.quantity.min(sell.quantity);
        let price = crossing::execution_price(buy.price, sell.price);
        let trade = Trade::new(sequencer.next_sequence(), instrument, price, fill);

        book.fill_heads(fill);

        debug!(
            sequence = trade.sequence,
            instrument = instrument.index(),
            price = %trade.price,
            quantity = fill.get(),
            "Trade executed"
        );

        outcome.record_fill(fill.get());
        sink.on_trade(&trade);
    }

    outcome
}

/// Match every instrument of the book in increasing index order
pub fn match_book<S: TradeSequencer + ?Sized>(
    book: &mut OrderBook,
    sequencer: &mut S,
    sink: &mut dyn TradeSink,
) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();
    for (instrument, instrument_book) in book.iter_mut() {
        let pass = match_instrument(instrument, instrument_book, &mut *sequencer, &mut *sink);
        outcome.absorb(pass);
    }
    outcome
}
