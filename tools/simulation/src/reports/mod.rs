//! Trade sinks for simulation output
//!
//! Console logging of each fill and per-instrument trade aggregation.

pub mod console;
pub mod tally;

pub use console::ConsoleReporter;
pub use tally::{InstrumentTally, TradeTally};
