//! Simulation entry point
//!
//! Usage: `simulate [config.json]`. Without a path the defaults are used.

use simulation::export::{build_export, write_to_file};
use simulation::{Simulation, SimulationConfig, SimulationError};

fn main() -> Result<(), SimulationError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(path = %path, "Loading simulation config");
            SimulationConfig::load(&path)?
        }
        None => SimulationConfig::default(),
    };

    tracing::info!("Starting order matching simulation");
    let simulation = Simulation::new(config)?;
    let outcome = simulation.run();

    tracing::info!("{}", outcome.metrics.summary());

    if let Some(path) = &simulation.config().export_path {
        let export = build_export(&outcome.metrics, simulation.venue().stats(), &outcome.tally);
        write_to_file(&export, path)?;
        tracing::info!(path = %path, "Export written");
    }

    Ok(())
}
