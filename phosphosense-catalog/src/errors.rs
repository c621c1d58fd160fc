//! Catalog errors
//!
//! Lookups by id fail with the id that was not found. Simulation errors from
//! the core are wrapped, not flattened.

use phosphosense_core::SimulationError;
use thiserror_no_std::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No sensor registered under this id
    #[error("Sensor not found: {id}")]
    SensorNotFound {
        /// Requested sensor id
        id: String,
    },

    /// A sensor with this id is already registered
    #[error("Sensor already registered: {id}")]
    DuplicateSensor {
        /// Conflicting sensor id
        id: String,
    },

    /// Offline sensors produce no new readings
    #[error("Sensor offline: {id}")]
    SensorOffline {
        /// Offline sensor id
        id: String,
    },

    /// An alert with this id is already on the board
    #[error("Alert already raised: {id}")]
    DuplicateAlert {
        /// Conflicting alert id
        id: String,
    },

    /// A recommendation with this id is already on the board
    #[error("Recommendation already issued: {id}")]
    DuplicateRecommendation {
        /// Conflicting recommendation id
        id: String,
    },

    /// No alert with this id
    #[error("Alert not found: {id}")]
    AlertNotFound {
        /// Requested alert id
        id: String,
    },

    /// Registry lock was poisoned by a panicking writer
    #[error("Registry lock poisoned")]
    LockPoisoned,

    /// Error from the simulation core
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulation_errors_are_wrapped() {
        let err: CatalogError = SimulationError::InvalidWindow { hours: -1, max: 24 }.into();
        assert_eq!(err.to_string(), "Simulation error: Invalid window: -1h (allowed 0..=24h)");
    }
}
