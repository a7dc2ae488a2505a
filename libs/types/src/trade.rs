//! Trade report types
//!
//! A trade is an ephemeral output of a matching pass. It is handed to
//! whatever sink the caller supplies and never retained by the book.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::InstrumentId;
use crate::numeric::{Price, Quantity};

/// A single fill between the head buy and head sell of one instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Monotonic sequence in emission order
    pub sequence: u64,
    pub instrument: InstrumentId,
    /// Execution price; always the resting sell order's price
    pub price: Price,
    pub quantity: Quantity,
}

impl Trade {
    pub fn new(sequence: u64, instrument: InstrumentId, price: Price, quantity: Quantity) -> Self {
        Self {
            sequence,
            instrument,
            price,
            quantity,
        }
    }

    /// Calculate trade value (price × quantity), saturating at `Decimal::MAX`
    pub fn notional(&self) -> Decimal {
        self.price.as_decimal().saturating_mul(self.quantity.as_decimal())
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matched: Ticker {} | Price {:.2} | Quantity {}",
            self.instrument,
            self.price.as_decimal(),
            self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trade() -> Trade {
        Trade::new(7, InstrumentId::new(5), Price::from_minor(4500, 2), Quantity::new(60))
    }

    #[test]
    fn test_trade_notional() {
        assert_eq!(sample_trade().notional(), Decimal::from(2700));
    }

    #[test]
    fn test_trade_notional_saturates() {
        let trade = Trade::new(
            1,
            InstrumentId::new(0),
            Price::new(Decimal::MAX),
            Quantity::new(i64::MAX as u64),
        );
        assert_eq!(trade.notional(), Decimal::MAX);
    }

    #[test]
    fn test_trade_display() {
        let trade = Trade::new(
            1,
            InstrumentId::new(3),
            Price::from_minor(255, 1),
            Quantity::new(10),
        );
        assert_eq!(trade.to_string(), "Matched: Ticker 3 | Price 25.50 | Quantity 10");
    }

    #[test]
    fn test_trade_serialization() {
        let trade = sample_trade();
        let json = serde_json::to_string(&trade).unwrap();
        assert_eq!(
            json,
            r#"{"sequence":7,"instrument":5,"price":"45.00","quantity":60}"#
        );

        let deserialized: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(trade, deserialized);
    }
}
