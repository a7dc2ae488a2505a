//! Metrics and report export
//!
//! Serializes simulation results to JSON for external consumption.

use matching_engine::stats::StatsSnapshot;
use serde::{Deserialize, Serialize};

use crate::metrics::SimMetrics;
use crate::reports::TradeTally;

/// Combined export containing all simulation outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationExport {
    pub version: String,
    pub metrics: SimMetrics,
    pub engine_stats: StatsSnapshot,
    pub tally: TradeTally,
}

/// Build a complete simulation export.
pub fn build_export(
    metrics: &SimMetrics,
    engine_stats: StatsSnapshot,
    tally: &TradeTally,
) -> SimulationExport {
    SimulationExport {
        version: crate::VERSION.to_string(),
        metrics: metrics.clone(),
        engine_stats,
        tally: tally.clone(),
    }
}

/// Export complete simulation data as JSON.
pub fn export_json(export: &SimulationExport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(export)
}

/// Write export to a file path.
pub fn write_to_file(export: &SimulationExport, path: &str) -> Result<(), crate::SimulationError> {
    let json = export_json(export)?;
    std::fs::write(path, json)?;
    Ok(())
}
