//! Retail random trader bot
//!
//! Generates random orders with deterministic seeded RNG: side, instrument,
//! quantity and price are drawn uniformly from the configured ranges.

use matching_engine::{EngineError, Venue};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use std::time::Duration;
use types::ids::InstrumentId;
use types::order::Side;

use crate::config::{OrderRanges, MAX_PRICE_SCALE};

/// Generated order parameters, not yet validated by a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomOrder {
    pub side: Side,
    pub instrument: InstrumentId,
    pub quantity: i64,
    pub price: Decimal,
}

/// Random trader with deterministic seeded RNG.
pub struct RetailTrader {
    pub ranges: OrderRanges,
    pub orders_submitted: usize,
    pub orders_rejected: usize,
    /// Sum of quantities the venue accepted
    pub quantity_submitted: u64,
    /// Price bounds in minor units at `ranges.price_scale`
    min_price_minor: i64,
    max_price_minor: i64,
    rng: ChaCha8Rng,
}

impl RetailTrader {
    /// Create a new retail trader with a deterministic seed.
    ///
    /// A `price_scale` finer than `MAX_PRICE_SCALE` is clamped to it.
    pub fn new(mut ranges: OrderRanges, seed: u64) -> Self {
        ranges.price_scale = ranges.price_scale.min(MAX_PRICE_SCALE);
        let factor = Decimal::from(10i64.pow(ranges.price_scale));

        let min_price_minor = ranges
            .min_price
            .checked_mul(factor)
            .and_then(|minor| minor.ceil().to_i64())
            .unwrap_or(1)
            .max(1);
        let max_price_minor = ranges
            .max_price
            .checked_mul(factor)
            .and_then(|minor| minor.floor().to_i64())
            .unwrap_or(i64::MAX)
            .max(min_price_minor);

        Self {
            ranges,
            orders_submitted: 0,
            orders_rejected: 0,
            quantity_submitted: 0,
            min_price_minor,
            max_price_minor,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random order for a book of `instrument_count` slots.
    pub fn generate_order(&mut self, instrument_count: usize) -> RandomOrder {
        let side = if self.rng.gen_bool(0.5) { Side::BUY } else { Side::SELL };
        let instrument = InstrumentId::new(self.rng.gen_range(0..instrument_count.max(1)));
        let quantity = self
            .rng
            .gen_range(self.ranges.min_quantity..=self.ranges.max_quantity);
        let minor = self.rng.gen_range(self.min_price_minor..=self.max_price_minor);

        RandomOrder {
            side,
            instrument,
            quantity,
            price: Decimal::new(minor, self.ranges.price_scale),
        }
    }

    /// Pause before the next order, drawn uniformly from `[min_ms, max_ms]`.
    pub fn next_delay(&mut self, min_ms: u64, max_ms: u64) -> Duration {
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(self.rng.gen_range(min_ms..=max_ms))
    }

    /// Generate and submit an order to the venue.
    pub fn tick(&mut self, venue: &dyn Venue) -> Result<RandomOrder, EngineError> {
        let order = self.generate_order(venue.instrument_count());
        match venue.submit(order.side, order.instrument, order.quantity, order.price) {
            Ok(()) => {
                self.orders_submitted += 1;
                self.quantity_submitted =
                    self.quantity_submitted.saturating_add(order.quantity as u64);
                Ok(order)
            }
            Err(err) => {
                self.orders_rejected += 1;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matching_engine::MatchingEngine;
    use proptest::prelude::*;

    #[test]
    fn test_deterministic_output() {
        let mut t1 = RetailTrader::new(OrderRanges::default(), 42);
        let mut t2 = RetailTrader::new(OrderRanges::default(), 42);

        for _ in 0..20 {
            assert_eq!(t1.generate_order(1024), t2.generate_order(1024));
        }
    }

    #[test]
    fn test_different_seeds_different_output() {
        let mut t1 = RetailTrader::new(OrderRanges::default(), 1);
        let mut t2 = RetailTrader::new(OrderRanges::default(), 2);

        let same_count = (0..10)
            .filter(|_| t1.generate_order(1024) == t2.generate_order(1024))
            .count();
        // Extremely unlikely all 10 are the same
        assert!(same_count < 10);
    }

    #[test]
    fn test_prices_have_two_decimals() {
        let mut trader = RetailTrader::new(OrderRanges::default(), 7);
        for _ in 0..100 {
            let order = trader.generate_order(16);
            assert_eq!(order.price.scale(), 2);
        }
    }

    #[test]
    fn test_oversized_price_scale_is_clamped() {
        let ranges = OrderRanges {
            price_scale: 30,
            ..OrderRanges::default()
        };
        let mut trader = RetailTrader::new(ranges, 3);
        assert_eq!(trader.ranges.price_scale, MAX_PRICE_SCALE);

        for _ in 0..50 {
            let order = trader.generate_order(16);
            assert_eq!(order.price.scale(), MAX_PRICE_SCALE);
            assert!(order.price >= Decimal::from(10) && order.price <= Decimal::from(400));
        }
    }

    #[test]
    fn test_tick_with_engine() {
        let engine = MatchingEngine::new(8, 1);
        let mut trader = RetailTrader::new(OrderRanges::default(), 42);

        let order = trader.tick(&engine).unwrap();
        assert!(order.instrument.index() < 8);
        assert_eq!(trader.orders_submitted, 1);
        assert_eq!(trader.quantity_submitted, order.quantity as u64);
        assert_eq!(engine.open_order_count(), 1);
    }

    #[test]
    fn test_tick_counts_rejections() {
        let engine = MatchingEngine::new(8, 1);
        // A range the venue will refuse
        let ranges = OrderRanges {
            min_quantity: -5,
            max_quantity: -5,
            ..OrderRanges::default()
        };
        let mut trader = RetailTrader::new(ranges, 42);

        assert!(trader.tick(&engine).is_err());
        assert_eq!(trader.orders_rejected, 1);
        assert_eq!(trader.quantity_submitted, 0);
        assert_eq!(engine.open_order_count(), 0);
    }

    #[test]
    fn test_zero_delay() {
        let mut trader = RetailTrader::new(OrderRanges::default(), 42);
        assert_eq!(trader.next_delay(0, 0), Duration::ZERO);
        let delay = trader.next_delay(10, 100);
        assert!(delay >= Duration::from_millis(10) && delay <= Duration::from_millis(100));
    }

    proptest! {
        #[test]
        fn prop_orders_within_ranges(seed in any::<u64>(), instruments in 1usize..2048) {
            let ranges = OrderRanges::default();
            let mut trader = RetailTrader::new(ranges.clone(), seed);
            for _ in 0..20 {
                let order = trader.generate_order(instruments);
                prop_assert!(order.instrument.index() < instruments);
                prop_assert!(order.quantity >= ranges.min_quantity);
                prop_assert!(order.quantity <= ranges.max_quantity);
                prop_assert!(order.price >= ranges.min_price && order.price <= ranges.max_price);
            }
        }
    }
}
