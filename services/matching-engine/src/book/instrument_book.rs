//! Per-instrument book
//!
//! Holds the buy and sell FIFO queues for a single instrument. The head of
//! each queue is treated as that side's best order regardless of price.

use serde::{Deserialize, Serialize};
use types::ids::InstrumentId;
use types::numeric::Quantity;
use types::order::{Order, Side};

use super::side_queue::SideQueue;

/// Buy and sell queues for one instrument
#[derive(Debug, Clone, Default)]
pub struct InstrumentBook {
    buys: SideQueue,
    sells: SideQueue,
}

impl InstrumentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order to the tail of its side's queue
    pub fn insert(&mut self, side: Side, order: Order) {
        self.queue_mut(side).push_back(order);
    }

    pub fn queue(&self, side: Side) -> &SideQueue {
        match side {
            Side::BUY => &self.buys,
            Side::SELL => &self.sells,
        }
    }

    fn queue_mut(&mut self, side: Side) -> &mut SideQueue {
        match side {
            Side::BUY => &mut self.buys,
            Side::SELL => &mut self.sells,
        }
    }

    /// Head buy and head sell, if both sides have an order
    pub fn heads(&self) -> Option<(Order, Order)> {
        match (self.buys.peek_front(), self.sells.peek_front()) {
            (Some(buy), Some(sell)) => Some((*buy, *sell)),
            _ => None,
        }
    }

    /// Reduce both heads by the same fill, dropping any that are exhausted
    pub(crate) fn fill_heads(&mut self, fill: Quantity) {
        self.buys.fill_front(fill);
        self.sells.fill_front(fill);
    }

    /// Number of open orders on both sides
    pub fn order_count(&self) -> usize {
        self.buys.len() + self.sells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buys.is_empty() && self.sells.is_empty()
    }

    /// Copy both queues, head first
    pub fn snapshot(&self, instrument: InstrumentId) -> InstrumentSnapshot {
        InstrumentSnapshot {
            instrument,
            buys: self.buys.iter().copied().collect(),
            sells: self.sells.iter().copied().collect(),
        }
    }
}

/// Point-in-time copy of one instrument's queues
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentSnapshot {
    pub instrument: InstrumentId,
    pub buys: Vec<Order>,
    pub sells: Vec<Order>,
}

impl InstrumentSnapshot {
    pub fn is_empty(&self) -> bool {
        self.buys.is_empty() && self.sells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::numeric::Price;

    fn order(price: u64, qty: u64) -> Order {
        Order::new(Price::from_u64(price), Quantity::new(qty))
    }

    #[test]
    fn test_instrument_book_insert_by_side() {
        let mut book = InstrumentBook::new();
        book.insert(Side::BUY, order(50, 10));
        book.insert(Side::SELL, order(45, 20));
        book.insert(Side::SELL, order(46, 5));

        assert_eq!(book.queue(Side::BUY).len(), 1);
        assert_eq!(book.queue(Side::SELL).len(), 2);
        assert_eq!(book.order_count(), 3);
    }

    #[test]
    fn test_instrument_book_heads_need_both_sides() {
        let mut book = InstrumentBook::new();
        assert_eq!(book.heads(), None);

        book.insert(Side::BUY, order(50, 10));
        assert_eq!(book.heads(), None);

        book.insert(Side::SELL, order(45, 20));
        assert_eq!(book.heads(), Some((order(50, 10), order(45, 20))));
    }

    #[test]
    fn test_instrument_book_fill_heads() {
        let mut book = InstrumentBook::new();
        book.insert(Side::BUY, order(50, 100));
        book.insert(Side::SELL, order(45, 60));

        book.fill_heads(Quantity::new(60));

        assert!(book.queue(Side::SELL).is_empty());
        assert_eq!(book.queue(Side::BUY).peek_front(), Some(&order(50, 40)));
    }

    #[test]
    fn test_instrument_book_snapshot() {
        let mut book = InstrumentBook::new();
        book.insert(Side::BUY, order(50, 1));
        book.insert(Side::BUY, order(49, 2));
        book.insert(Side::SELL, order(55, 3));

        let snapshot = book.snapshot(InstrumentId::new(9));
        assert_eq!(snapshot.instrument, InstrumentId::new(9));
        assert_eq!(snapshot.buys, vec![order(50, 1), order(49, 2)]);
        assert_eq!(snapshot.sells, vec![order(55, 3)]);
    }
}
