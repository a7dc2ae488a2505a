//! Concurrency test
//!
//! Many random traders share one venue. Whatever the interleaving, every
//! unit of quantity submitted is either filled or still resting, and no
//! instrument is left crossed.

use matching_engine::{EngineConfig, LockMode, Venue};
use simulation::{MatchMode, Simulation, SimulationConfig};
use types::ids::InstrumentId;

fn config(mode: LockMode, match_mode: MatchMode) -> SimulationConfig {
    SimulationConfig {
        seed: 7,
        workers: 6,
        orders_per_worker: 1_500,
        match_mode,
        engine: EngineConfig::default()
            .with_instrument_count(32)
            .with_lock_mode(mode),
        ..SimulationConfig::default()
    }
    .without_delay()
}

fn resting_quantity(venue: &dyn Venue) -> u64 {
    (0..venue.instrument_count())
        .map(|i| {
            let snapshot = venue.snapshot(InstrumentId::new(i)).unwrap();
            if let (Some(buy), Some(sell)) = (snapshot.buys.first(), snapshot.sells.first()) {
                assert!(buy.price < sell.price, "instrument {} left crossed", i);
            }
            snapshot
                .buys
                .iter()
                .chain(snapshot.sells.iter())
                .map(|o| o.quantity.get())
                .sum::<u64>()
        })
        .sum()
}

fn check_conservation(mode: LockMode, match_mode: MatchMode) {
    let simulation = Simulation::new(config(mode, match_mode)).unwrap();
    let outcome = simulation.run();
    let venue = simulation.venue();

    assert_eq!(outcome.metrics.orders_submitted, 6 * 1_500);
    assert_eq!(outcome.metrics.orders_rejected, 0);

    // Engine counters agree with what the sinks saw
    let stats = venue.stats();
    assert_eq!(stats.trades_executed, outcome.tally.trades);
    assert_eq!(stats.quantity_filled, outcome.tally.filled_quantity);

    // Each fill consumes quantity on both sides
    let resting = resting_quantity(venue.as_ref());
    assert_eq!(
        outcome.tally.filled_quantity * 2 + resting,
        outcome.metrics.quantity_submitted
    );

    let per_instrument_fills: u64 = outcome.tally.per_instrument.values().map(|t| t.quantity).sum();
    assert_eq!(per_instrument_fills, outcome.tally.filled_quantity);
    assert_eq!(outcome.metrics.open_orders, venue.open_order_count());
}

#[test]
fn test_concurrent_traders_global_lock() {
    check_conservation(LockMode::Global, MatchMode::AfterEachSubmit);
}

#[test]
fn test_concurrent_traders_per_instrument_lock() {
    check_conservation(LockMode::PerInstrument, MatchMode::AfterEachSubmit);
}

#[test]
fn test_periodic_matcher() {
    check_conservation(LockMode::Global, MatchMode::Periodic { interval_ms: 0 });
    check_conservation(LockMode::PerInstrument, MatchMode::Periodic { interval_ms: 1 });
}

#[test]
fn test_single_worker_determinism() {
    let run = || {
        let config = SimulationConfig {
            workers: 1,
            orders_per_worker: 2_000,
            engine: EngineConfig::default().with_instrument_count(16),
            ..SimulationConfig::default()
        }
        .without_delay();
        Simulation::new(config).unwrap().run()
    };

    let first = run();
    let second = run();

    assert_eq!(first.tally, second.tally, "Same seed must produce identical trades");
    assert_eq!(first.metrics.open_orders, second.metrics.open_orders);
}
