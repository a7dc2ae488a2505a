//! Matching logic module
//!
//! Implements head-of-queue FIFO matching

pub mod crossing;
pub mod executor;

pub use crossing::can_match;
pub use executor::{match_book, match_instrument, MatchExecutor, MatchOutcome, TradeSequencer};
