//! Trade tally
//!
//! Aggregates trade count, filled quantity and notional per instrument.

use matching_engine::TradeSink;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use types::ids::InstrumentId;
use types::numeric::Price;
use types::trade::Trade;

/// Totals for one instrument
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentTally {
    pub trades: u64,
    pub quantity: u64,
    pub notional: Decimal,
    /// Price of the highest-sequence trade seen
    pub last_price: Option<Price>,
    last_sequence: u64,
}

impl InstrumentTally {
    fn record(&mut self, trade: &Trade) {
        self.trades += 1;
        self.quantity = self.quantity.saturating_add(trade.quantity.get());
        self.notional = self.notional.saturating_add(trade.notional());
        if self.last_price.is_none() || trade.sequence >= self.last_sequence {
            self.last_price = Some(trade.price);
            self.last_sequence = trade.sequence;
        }
    }

    fn merge(&mut self, other: &InstrumentTally) {
        self.trades += other.trades;
        self.quantity = self.quantity.saturating_add(other.quantity);
        self.notional = self.notional.saturating_add(other.notional);
        if other.last_price.is_some()
            && (self.last_price.is_none() || other.last_sequence >= self.last_sequence)
        {
            self.last_price = other.last_price;
            self.last_sequence = other.last_sequence;
        }
    }
}

/// Sink aggregating every trade it receives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeTally {
    pub trades: u64,
    pub filled_quantity: u64,
    pub notional: Decimal,
    pub per_instrument: BTreeMap<InstrumentId, InstrumentTally>,
}

impl TradeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold another tally (e.g. from another worker) into this one
    pub fn merge(&mut self, other: &TradeTally) {
        self.trades += other.trades;
        self.filled_quantity = self.filled_quantity.saturating_add(other.filled_quantity);
        self.notional = self.notional.saturating_add(other.notional);
        for (instrument, tally) in &other.per_instrument {
            self.per_instrument.entry(*instrument).or_default().merge(tally);
        }
    }

    pub fn instrument(&self, instrument: InstrumentId) -> Option<&InstrumentTally> {
        self.per_instrument.get(&instrument)
    }
}

impl TradeSink for TradeTally {
    fn on_trade(&mut self, trade: &Trade) {
        self.trades += 1;
        self.filled_quantity = self.filled_quantity.saturating_add(trade.quantity.get());
        self.notional = self.notional.saturating_add(trade.notional());
        self.per_instrument
            .entry(trade.instrument)
            .or_default()
            .record(trade);
    }
}
