//! Order sources
//!
//! Bots generate order flow and push it through a `Venue`.

pub mod retail_trader;

pub use retail_trader::{RandomOrder, RetailTrader};
