//! Error Types for Simulation and Configuration Failures
//!
//! ## Design
//!
//! Single readings cannot fail: a `SensorType` is a closed enum. Errors come
//! from unknown type names and from history windows the simulator will not
//! generate:
//!
//! - `InvalidSensorType`: an unknown type name. There is no fallback unit or
//!   threshold set.
//! - `InvalidWindow`: a negative look-back window, or one longer than the
//!   configured maximum.
//! - `WindowOutOfRange`: a window reaching back before the earliest instant
//!   a timestamp can hold.
//!
//! Configuration loading has its own error type. It wraps I/O and JSON errors,
//! which are neither `Clone` nor `PartialEq`.
//!
//! ```rust
//! use phosphosense_core::{Simulator, SimulationError};
//!
//! let mut simulator = Simulator::seeded(7);
//! match simulator.history_named("s001", "ammonia", 24) {
//!     Ok(_) => {}
//!     Err(SimulationError::InvalidSensorType { name }) => {
//!         assert_eq!(name, "ammonia");
//!     }
//!     Err(other) => panic!("unexpected error: {other}"),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Simulation errors, raised only for externally supplied input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Sensor type name is not one of the known types
    #[error("Invalid sensor type: {name:?}")]
    InvalidSensorType {
        /// The name that failed to parse
        name: String,
    },

    /// History window is negative or exceeds the configured maximum
    #[error("Invalid window: {hours}h (allowed 0..={max}h)")]
    InvalidWindow {
        /// Requested window length in hours
        hours: i64,
        /// Largest accepted window in hours
        max: u32,
    },

    /// History window starts before the earliest representable instant
    #[error("Window of {hours}h starts before the earliest representable time")]
    WindowOutOfRange {
        /// Requested window length in hours
        hours: u32,
    },
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Malformed JSON or a field of the wrong shape
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config file could not be read
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A field parsed but holds an unacceptable value
    #[error("Invalid config field `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = SimulationError::InvalidSensorType { name: "lux".into() };
        assert_eq!(err.to_string(), "Invalid sensor type: \"lux\"");

        let err = SimulationError::InvalidWindow { hours: -3, max: 2160 };
        assert_eq!(err.to_string(), "Invalid window: -3h (allowed 0..=2160h)");

        let err = SimulationError::WindowOutOfRange { hours: 5 };
        assert_eq!(err.to_string(), "Window of 5h starts before the earliest representable time");
    }

    #[test]
    fn config_error_wraps_json_errors() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
