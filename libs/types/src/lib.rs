//! Types library for the matching venue
//!
//! Core type definitions shared by the matching engine and its
//! collaborators. Prices are fixed-point decimals, quantities are
//! positive integers, and instruments are bounded integer indices.
//!
//! # Modules
//! - `ids`: Instrument identifiers
//! - `numeric`: Fixed-point price and positive integer quantity
//! - `order`: Side and resting order record
//! - `trade`: Trade report emitted by matching
//! - `errors`: Error taxonomy

pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
    pub use crate::errors::*;
}
