//! Simulation errors

use matching_engine::config::ConfigError;
use matching_engine::EngineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error("engine config: {0}")]
    Engine(#[from] ConfigError),

    #[error("order rejected: {0}")]
    Rejected(#[from] EngineError),

    #[error("malformed simulation config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
