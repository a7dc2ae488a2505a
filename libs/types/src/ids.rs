//! Instrument identifiers
//!
//! Instruments are addressed by a dense integer index into the book's
//! fixed set of slots. The index is only meaningful relative to a book
//! size, so range checks take the limit explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::OrderError;

/// Index of a tradable instrument slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(usize);

impl InstrumentId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw slot index
    pub fn index(&self) -> usize {
        self.0
    }

    /// Check the index against a book of `limit` instruments
    ///
    /// Returns the raw index on success so callers can index directly.
    pub fn checked_index(&self, limit: usize) -> Result<usize, OrderError> {
        if self.0 < limit {
            Ok(self.0)
        } else {
            Err(OrderError::InvalidInstrument {
                index: self.0,
                limit,
            })
        }
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for InstrumentId {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_index_in_range() {
        assert_eq!(InstrumentId::new(0).checked_index(1024), Ok(0));
        assert_eq!(InstrumentId::new(1023).checked_index(1024), Ok(1023));
    }

    #[test]
    fn test_checked_index_out_of_range() {
        let err = InstrumentId::new(1024).checked_index(1024).unwrap_err();
        assert_eq!(err, OrderError::InvalidInstrument { index: 1024, limit: 1024 });
    }

    #[test]
    fn test_instrument_id_serialization() {
        let id = InstrumentId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");

        let deserialized: InstrumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
