//! Console trade reporter
//!
//! Logs one line per trade, e.g.
//! `Matched: Ticker 5 | Price 45.00 | Quantity 60`.

use matching_engine::TradeSink;
use tracing::info;
use types::trade::Trade;

/// Sink that logs every trade at info level
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    pub lines: u64,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TradeSink for ConsoleReporter {
    fn on_trade(&mut self, trade: &Trade) {
        self.lines += 1;
        info!(sequence = trade.sequence, "{}", trade);
    }
}
