//! Crossing detection logic
//!
//! Determines when a head buy and head sell can match based on price

use types::numeric::Price;

/// Check if a bid and ask can match at given prices
///
/// Buy price must be >= sell price. Equal prices cross.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Execution price for a crossing pair
///
/// Always the sell order's price, so any improvement goes to the buyer.
pub fn execution_price(_bid_price: Price, ask_price: Price) -> Price {
    ask_price
}
