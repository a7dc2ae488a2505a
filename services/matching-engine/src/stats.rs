//! Engine counters
//!
//! Lock-free counters updated alongside submissions and matching passes.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::matching::MatchOutcome;

/// Running totals for one engine
#[derive(Debug, Default)]
pub struct EngineStats {
    orders_accepted: AtomicU64,
    orders_rejected: AtomicU64,
    trades_executed: AtomicU64,
    quantity_filled: AtomicU64,
}

/// Point-in-time copy of `EngineStats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub orders_accepted: u64,
    pub orders_rejected: u64,
    pub trades_executed: u64,
    pub quantity_filled: u64,
}

impl EngineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_accepted(&self) {
        self.orders_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.orders_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_match(&self, outcome: MatchOutcome) {
        self.trades_executed.fetch_add(outcome.trades as u64, Ordering::Relaxed);
        // Saturate rather than wrap, matching MatchOutcome
        let _ = self
            .quantity_filled
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |filled| {
                Some(filled.saturating_add(outcome.quantity))
            });
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            orders_accepted: self.orders_accepted.load(Ordering::Relaxed),
            orders_rejected: self.orders_rejected.load(Ordering::Relaxed),
            trades_executed: self.trades_executed.load(Ordering::Relaxed),
            quantity_filled: self.quantity_filled.load(Ordering::Relaxed),
        }
    }
}
