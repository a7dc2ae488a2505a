//! Engine configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Instrument slots in a default book
pub const DEFAULT_INSTRUMENT_COUNT: usize = 1024;

/// How the book is protected against concurrent access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockMode {
    /// One exclusive lock over the whole book
    #[default]
    Global,
    /// One exclusive lock per instrument
    PerInstrument,
}

/// Configuration for a matching engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of instrument slots; valid indices are `0..instrument_count`.
    pub instrument_count: usize,
    /// Locking discipline.
    pub lock_mode: LockMode,
    /// Sequence number given to the first trade.
    pub starting_sequence: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            instrument_count: DEFAULT_INSTRUMENT_COUNT,
            lock_mode: LockMode::Global,
            starting_sequence: 1,
        }
    }
}

impl EngineConfig {
    pub fn with_instrument_count(mut self, instrument_count: usize) -> Self {
        self.instrument_count = instrument_count;
        self
    }

    pub fn with_lock_mode(mut self, lock_mode: LockMode) -> Self {
        self.lock_mode = lock_mode;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.instrument_count == 0 {
            return Err(ConfigError::InvalidInstrumentCount(self.instrument_count));
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("instrument_count must be at least 1, got {0}")]
    InvalidInstrumentCount(usize),

    #[error("malformed engine config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.instrument_count, 1024);
        assert_eq!(config.lock_mode, LockMode::Global);
        assert_eq!(config.starting_sequence, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_instruments_rejected() {
        let config = EngineConfig::default().with_instrument_count(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidInstrumentCount(0))
        ));
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json_str(r#"{"lock_mode":"per_instrument"}"#).unwrap();
        assert_eq!(config.lock_mode, LockMode::PerInstrument);
        assert_eq!(config.instrument_count, DEFAULT_INSTRUMENT_COUNT);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"instrument_count":0}"#),
            Err(ConfigError::InvalidInstrumentCount(0))
        ));
        assert!(matches!(
            EngineConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
