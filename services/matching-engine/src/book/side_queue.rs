//! FIFO queue of open orders for one side of one instrument
//!
//! Orders are kept strictly in insertion order. The head is the only order
//! matching ever looks at; nothing here sorts or reorders by price.

use std::collections::VecDeque;
use types::numeric::Quantity;
use types::order::Order;

/// One side (buy or sell) of an instrument's book
#[derive(Debug, Clone, Default)]
pub struct SideQueue {
    /// Open orders, oldest first
    orders: VecDeque<Order>,
}

impl SideQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order at the tail (time priority)
    pub fn push_back(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    /// Peek at the head order without removing it
    pub fn peek_front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Apply a fill to the head order
    ///
    /// The head is removed as soon as its quantity reaches zero, so the queue
    /// never holds an exhausted order. Returns true if the head was removed.
    pub fn fill_front(&mut self, fill: Quantity) -> bool {
        let Some(head) = self.orders.front_mut() else {
            return false;
        };

        if head.fill(fill) {
            self.orders.pop_front();
            true
        } else {
            false
        }
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of open orders on this side
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Iterate head first
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
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
    fn test_side_queue_push() {
        let mut queue = SideQueue::new();
        queue.push_back(order(50, 15));

        assert_eq!(queue.len(), 1);
        assert!(!queue.is_empty());
    }

    #[test]
    fn test_side_queue_fifo_not_price_sorted() {
        let mut queue = SideQueue::new();
        queue.push_back(order(40, 1));
        queue.push_back(order(60, 2));
        queue.push_back(order(50, 3));

        // Head is the oldest order even though a better price sits behind it
        assert_eq!(queue.peek_front(), Some(&order(40, 1)));
        let quantities: Vec<u64> = queue
            .iter()
            .map(|o| o.quantity.get())
            .collect();
        assert_eq!(quantities, vec![1, 2, 3]);
    }

    #[test]
    fn test_side_queue_partial_fill_keeps_head() {
        let mut queue = SideQueue::new();
        queue.push_back(order(50, 100));
        queue.push_back(order(51, 10));

        let removed = queue.fill_front(Quantity::new(60));
        assert!(!removed);
        assert_eq!(queue.peek_front(), Some(&order(50, 40)));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_side_queue_full_fill_removes_head() {
        let mut queue = SideQueue::new();
        queue.push_back(order(50, 60));
        queue.push_back(order(51, 10));

        let removed = queue.fill_front(Quantity::new(60));
        assert!(removed);
        assert_eq!(queue.peek_front(), Some(&order(51, 10)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_side_queue_fill_empty_is_noop() {
        let mut queue = SideQueue::new();
        assert!(!queue.fill_front(Quantity::new(5)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_side_queue_holds_quantities_beyond_u64_sum() {
        let max = i64::MAX as u64;
        let mut queue = SideQueue::new();
        for _ in 0..3 {
            queue.push_back(order(1, max));
        }

        assert_eq!(queue.len(), 3);
        assert!(!queue.fill_front(Quantity::new(max - 1)));
        assert_eq!(queue.peek_front(), Some(&order(1, 1)));
        assert!(queue.fill_front(Quantity::new(max)));
        assert_eq!(queue.len(), 2);
    }
}
