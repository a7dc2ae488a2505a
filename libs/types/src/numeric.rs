//! Fixed-point price and integer quantity types
//!
//! Prices use rust_decimal for deterministic arithmetic (no floating-point
//! errors in cumulative totals). Quantities are whole units. Both types can
//! only hold strictly positive values, so a resting order can never carry
//! a zero or negative amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

use crate::errors::OrderError;

/// Limit price of an order, always > 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal
    ///
    /// # Panics
    /// Panics if the value is not strictly positive
    pub fn new(value: Decimal) -> Self {
        assert!(value > Decimal::ZERO, "Price must be positive");
        Self(value)
    }

    /// Try to create a price, returning None if not strictly positive
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Whole-unit price, e.g. `Price::from_u64(50)` is 50
    ///
    /// # Panics
    /// Panics on zero
    pub fn from_u64(value: u64) -> Self {
        Self::new(Decimal::from(value))
    }

    /// Price expressed in minor units with `scale` decimal places,
    /// e.g. `Price::from_minor(4500, 2)` is 45.00
    ///
    /// # Panics
    /// Panics if `minor` is not positive
    pub fn from_minor(minor: i64, scale: u32) -> Self {
        Self::new(Decimal::new(minor, scale))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = OrderError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or(OrderError::InvalidPrice(value))
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Remaining quantity of an order, always > 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU64);

impl Quantity {
    /// Create a quantity
    ///
    /// # Panics
    /// Panics on zero
    pub fn new(value: u64) -> Self {
        match NonZeroU64::new(value) {
            Some(inner) => Self(inner),
            None => panic!("Quantity must be positive"),
        }
    }

    /// Try to create a quantity, returning None on zero
    pub fn try_new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }

    /// Reduce by a fill, returning what is left
    ///
    /// Returns None once nothing remains, which is the signal to remove the
    /// order from its queue. A fill larger than the quantity also yields None.
    pub fn reduce_by(self, fill: Quantity) -> Option<Quantity> {
        Self::try_new(self.get().saturating_sub(fill.get()))
    }

    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.get())
    }
}

impl TryFrom<i64> for Quantity {
    type Error = OrderError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .ok()
            .and_then(Self::try_new)
            .ok_or(OrderError::InvalidQuantity(value))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
