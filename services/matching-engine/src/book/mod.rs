//! Order book infrastructure module
//!
//! Contains the per-side FIFO queue, the per-instrument book, and the
//! fixed-size book covering every instrument slot.

pub mod side_queue;
pub mod instrument_book;
pub mod order_book;

pub use side_queue::SideQueue;
pub use instrument_book::{InstrumentBook, InstrumentSnapshot};
pub use order_book::{validate_submission, OrderBook};
