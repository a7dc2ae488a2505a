//! Performance metrics for simulation
//!
//! Tracks submissions, rejections, trades, and throughput.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::reports::TradeTally;

/// Aggregated simulation metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimMetrics {
    pub orders_submitted: u64,
    pub orders_rejected: u64,
    /// Total quantity across accepted orders
    pub quantity_submitted: u64,
    pub trades: u64,
    pub filled_quantity: u64,
    pub notional: Decimal,
    /// Orders still resting when the run finished
    pub open_orders: usize,
    pub elapsed_ns: u64,
}

impl SimMetrics {
    /// Create empty metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a worker's submission counts.
    pub fn record_orders(&mut self, submitted: u64, rejected: u64, quantity: u64) {
        self.orders_submitted += submitted;
        self.orders_rejected += rejected;
        self.quantity_submitted += quantity;
    }

    /// Copy trade totals from a tally.
    pub fn record_trades(&mut self, tally: &TradeTally) {
        self.trades = tally.trades;
        self.filled_quantity = tally.filled_quantity;
        self.notional = tally.notional;
    }

    /// Set elapsed time.
    pub fn set_elapsed(&mut self, ns: u64) {
        self.elapsed_ns = ns;
    }

    /// Throughput: orders per second.
    pub fn orders_per_second(&self) -> f64 {
        if self.elapsed_ns == 0 {
            return 0.0;
        }
        self.orders_submitted as f64 / (self.elapsed_ns as f64 / 1_000_000_000.0)
    }

    /// Throughput: trades per second.
    pub fn trades_per_second(&self) -> f64 {
        if self.elapsed_ns == 0 {
            return 0.0;
        }
        self.trades as f64 / (self.elapsed_ns as f64 / 1_000_000_000.0)
    }

    /// Build a summary string.
    pub fn summary(&self) -> String {
        format!(
            "Orders: {} | Rejected: {} | Trades: {} | Filled: {} | Notional: {} | Open: {} | Throughput: {:.0} orders/s",
            self.orders_submitted,
            self.orders_rejected,
            self.trades,
            self.filled_quantity,
            self.notional,
            self.open_orders,
            self.orders_per_second(),
        )
    }
}
