//! Order types
//!
//! A resting order is just a limit price and a remaining quantity. Its side
//! and instrument are implied by the queue that holds it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::OrderError;
use crate::numeric::{Price, Quantity};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

/// Open order resting in a side queue
///
/// Price is fixed for the life of the order; quantity only ever shrinks
/// through fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub price: Price,
    pub quantity: Quantity,
}

impl Order {
    pub fn new(price: Price, quantity: Quantity) -> Self {
        Self { price, quantity }
    }

    /// Validate raw submission values into an order
    ///
    /// Quantity is checked before price so a request that is wrong on both
    /// counts reports the quantity.
    pub fn try_new(quantity: i64, price: Decimal) -> Result<Self, OrderError> {
        let quantity = Quantity::try_from(quantity)?;
        let price = Price::try_from(price)?;
        Ok(Self { price, quantity })
    }

    /// Apply a fill to this order
    ///
    /// Returns true when the order is exhausted and must leave its queue.
    /// The order is left untouched in that case.
    pub fn fill(&mut self, fill: Quantity) -> bool {
        match self.quantity.reduce_by(fill) {
            Some(remaining) => {
                self.quantity = remaining;
                false
            }
            None => true,
        }
    }
}
