//! Matching Engine Service
//!
//! Multi-instrument order matching with head-of-queue FIFO priority.
//! Each instrument slot has a buy queue and a sell queue kept in strict
//! submission order. A matching pass walks instruments in index order and
//! fills the two heads against each other while the buy head is priced at
//! or above the sell head, executing at the sell price.
//!
//! **Key Invariants:**
//! - No zero-quantity order ever rests in a queue
//! - Trades only when head buy price >= head sell price
//! - Conservation of quantity (filled + remaining == submitted)
//! - Untouched orders keep their relative FIFO order
//!
//! Queue contents are only touched under a `ConcurrencyGuard`, either one
//! for the whole book (`MatchingEngine`) or one per instrument
//! (`ShardedMatchingEngine`).

pub mod book;
pub mod matching;
pub mod engine;
pub mod sharded;
pub mod events;
pub mod guard;
pub mod config;
pub mod error;
pub mod stats;
pub mod venue;

pub use config::{EngineConfig, LockMode};
pub use engine::MatchingEngine;
pub use error::EngineError;
pub use events::TradeSink;
pub use sharded::ShardedMatchingEngine;
pub use venue::{build_venue, Venue};
