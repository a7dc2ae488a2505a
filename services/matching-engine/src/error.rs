//! Engine errors

use thiserror::Error;
use types::errors::OrderError;

/// Errors surfaced by venue operations
///
/// Only submission and inspection can fail; a matching pass never does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid order: {0}")]
    InvalidOrder(#[from] OrderError),
}
