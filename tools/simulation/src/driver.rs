//! Multi-threaded simulation driver
//!
//! Spawns one thread per configured worker, each a `RetailTrader` with its
//! own seed, all submitting into one shared venue. Matching runs either
//! right after each submission or on a dedicated timer thread. A final pass
//! after all workers finish drains anything still crossing.

use matching_engine::{build_venue, TradeSink, Venue};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use types::trade::Trade;

use crate::bots::RetailTrader;
use crate::config::{MatchMode, SimulationConfig};
use crate::error::SimulationError;
use crate::metrics::SimMetrics;
use crate::reports::{ConsoleReporter, TradeTally};

/// Console output plus aggregation, one per thread
#[derive(Debug, Default)]
struct WorkerSink {
    console: ConsoleReporter,
    tally: TradeTally,
}

impl TradeSink for WorkerSink {
    fn on_trade(&mut self, trade: &Trade) {
        self.console.on_trade(trade);
        self.tally.on_trade(trade);
    }
}

struct WorkerReport {
    submitted: u64,
    rejected: u64,
    quantity: u64,
    tally: TradeTally,
}

/// Results of a finished run
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub metrics: SimMetrics,
    pub tally: TradeTally,
}

/// A configured simulation bound to a venue
pub struct Simulation {
    config: SimulationConfig,
    venue: Arc<dyn Venue>,
}

impl Simulation {
    /// Validate the config and build the venue it describes
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let venue = build_venue(&config.engine)?;
        Ok(Self { config, venue })
    }

    /// Drive an existing venue; `config.engine` is ignored
    pub fn with_venue(
        config: SimulationConfig,
        venue: Arc<dyn Venue>,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self { config, venue })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn venue(&self) -> &Arc<dyn Venue> {
        &self.venue
    }

    /// Run all workers to completion
    pub fn run(&self) -> SimulationOutcome {
        info!(
            workers = self.config.workers,
            orders_per_worker = self.config.orders_per_worker,
            instruments = self.venue.instrument_count(),
            match_mode = ?self.config.match_mode,
            "Simulation starting"
        );

        let start = Instant::now();
        let stop = Arc::new(AtomicBool::new(false));

        let matcher = match self.config.match_mode {
            MatchMode::Periodic { interval_ms } => {
                Some(self.spawn_matcher(interval_ms, Arc::clone(&stop)))
            }
            MatchMode::AfterEachSubmit => None,
        };

        let workers: Vec<_> = (0..self.config.workers)
            .map(|index| self.spawn_worker(index))
            .collect();

        let mut tally = TradeTally::new();
        let mut metrics = SimMetrics::new();

        for handle in workers {
            match handle.join() {
                Ok(report) => {
                    metrics.record_orders(report.submitted, report.rejected, report.quantity);
                    tally.merge(&report.tally);
                }
                Err(_) => warn!("Simulation worker panicked"),
            }
        }

        stop.store(true, Ordering::Release);
        if let Some(handle) = matcher {
            match handle.join() {
                Ok(matched) => tally.merge(&matched),
                Err(_) => warn!("Matcher thread panicked"),
            }
        }

        // Drain whatever the last submissions left crossing
        let mut sink = WorkerSink::default();
        self.venue.run_with(&mut sink);
        tally.merge(&sink.tally);

        metrics.record_trades(&tally);
        metrics.open_orders = self.venue.open_order_count();
        metrics.set_elapsed(start.elapsed().as_nanos() as u64);

        info!(
            orders = metrics.orders_submitted,
            trades = metrics.trades,
            open_orders = metrics.open_orders,
            elapsed_ms = metrics.elapsed_ns / 1_000_000,
            "Simulation finished"
        );

        SimulationOutcome { metrics, tally }
    }

    fn spawn_worker(&self, index: usize) -> thread::JoinHandle<WorkerReport> {
        let venue = Arc::clone(&self.venue);
        let config = self.config.clone();
        let seed = config.seed.wrapping_add(index as u64);

        thread::spawn(move || {
            let mut trader = RetailTrader::new(config.orders.clone(), seed);
            let mut sink = WorkerSink::default();

            for _ in 0..config.orders_per_worker {
                if let Err(err) = trader.tick(venue.as_ref()) {
                    debug!(worker = index, error = %err, "Generated order rejected");
                }

                if config.match_mode == MatchMode::AfterEachSubmit {
                    venue.run_with(&mut sink);
                }

                let delay = trader.next_delay(config.min_delay_ms, config.max_delay_ms);
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }

            debug!(
                worker = index,
                submitted = trader.orders_submitted,
                rejected = trader.orders_rejected,
                "Worker finished"
            );

            WorkerReport {
                submitted: trader.orders_submitted as u64,
                rejected: trader.orders_rejected as u64,
                quantity: trader.quantity_submitted,
                tally: sink.tally,
            }
        })
    }

    fn spawn_matcher(
        &self,
        interval_ms: u64,
        stop: Arc<AtomicBool>,
    ) -> thread::JoinHandle<TradeTally> {
        let venue = Arc::clone(&self.venue);
        let interval = Duration::from_millis(interval_ms);

        thread::spawn(move || {
            let mut sink = WorkerSink::default();
            while !stop.load(Ordering::Acquire) {
                venue.run_with(&mut sink);
                if interval.is_zero() {
                    thread::yield_now();
                } else {
                    thread::sleep(interval);
                }
            }
            sink.tally
        })
    }
}
