//! Simulation configuration
//!
//! Loaded from JSON; every field is optional and falls back to its default.
//!
//! ```json
//! {
//!   "seed": 42,
//!   "defaultWindowHours": 24,
//!   "maxWindowHours": 720,
//!   "walkStepFraction": 0.05
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    constants::{DEFAULT_HISTORY_HOURS, MAX_HISTORY_HOURS, WALK_STEP_FRACTION},
    errors::ConfigError,
};

/// Knobs for the simulator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Seed for a reproducible random source; `None` seeds from entropy
    pub seed: Option<u64>,

    /// Window used by `Simulator::default_history`
    pub default_window_hours: u32,

    /// Largest window accepted from external input
    pub max_window_hours: u32,

    /// Random walk step as a fraction of the previous value
    pub walk_step_fraction: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_window_hours: DEFAULT_HISTORY_HOURS,
            max_window_hours: MAX_HISTORY_HOURS,
            walk_step_fraction: WALK_STEP_FRACTION,
        }
    }
}

impl SimulationConfig {
    /// Default config with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check field values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_window_hours > self.max_window_hours {
            return Err(ConfigError::Invalid {
                field: "defaultWindowHours",
                reason: "must not exceed maxWindowHours",
            });
        }

        if !(self.walk_step_fraction > 0.0 && self.walk_step_fraction < 1.0) {
            return Err(ConfigError::Invalid {
                field: "walkStepFraction",
                reason: "must be between 0 and 1 (exclusive)",
            });
        }

        Ok(())
    }
}
