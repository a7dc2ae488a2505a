//! Error types for order submission
//!
//! Every variant is a flavour of "invalid order": the submission is
//! rejected synchronously and never partially applied.

use rust_decimal::Decimal;
use thiserror::Error;

/// Order validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Invalid instrument: index {index} outside [0, {limit})")]
    InvalidInstrument { index: usize, limit: usize },

    #[error("Invalid quantity: {0} (must be positive)")]
    InvalidQuantity(i64),

    #[error("Invalid price: {0} (must be positive)")]
    InvalidPrice(Decimal),
}
