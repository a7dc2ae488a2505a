//! Trade delivery
//!
//! A matching pass hands each trade to a `TradeSink` in emission order.
//! Sinks are called while the book is locked, so they must not call back
//! into the engine.

use types::trade::Trade;

/// Receiver of trades emitted by a matching pass
pub trait TradeSink {
    fn on_trade(&mut self, trade: &Trade);
}

impl TradeSink for Vec<Trade> {
    fn on_trade(&mut self, trade: &Trade) {
        self.push(*trade);
    }
}

impl<F> TradeSink for F
where
    F: FnMut(&Trade),
{
    fn on_trade(&mut self, trade: &Trade) {
        self(trade)
    }
}
