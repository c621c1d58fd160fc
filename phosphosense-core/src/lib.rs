//! Core simulation engine for PhosphoSense
//!
//! Produces synthetic sensor readings for the waste-treatment monitoring
//! dashboard and classifies them against per-type thresholds.
//!
//! Two generators do the work:
//! - The reading generator samples one instantaneous measurement from a
//!   sensor type's characteristic range.
//! - The history generator seeds an hourly series with one reading and walks
//!   it forward toward "now", each step a bounded perturbation of the last.
//!
//! Every status badge and chart in the dashboard is fed by these two paths,
//! and both classify through the same threshold table.
//!
//! ```no_run
//! use phosphosense_core::{Simulator, SensorType, ReadingStatus};
//!
//! let mut simulator = Simulator::new();
//!
//! let reading = simulator.reading("r001", SensorType::Radiation);
//! if reading.status == ReadingStatus::Critical {
//!     // raise an alert
//! }
//!
//! let series = simulator.history("s002", SensorType::Radiation, 24)?;
//! assert_eq!(series.len(), 25);
//! # Ok::<(), phosphosense_core::SimulationError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging through the `log` facade
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod classify;
pub mod config;
pub mod constants;
pub mod errors;
pub mod generator;
pub mod history;
pub mod profiles;
pub mod simulator;
pub mod time;
pub mod types;
pub mod utils;

// Public API
pub use classify::classify;
pub use config::SimulationConfig;
pub use errors::{ConfigError, SimulationError, SimulationResult};
pub use generator::generate_reading;
pub use history::{generate_historical_data, HistoryStats, RandomWalk};
pub use profiles::{profile, SensorProfile, ThresholdRule};
pub use simulator::Simulator;
pub use time::{Clock, FixedClock, SystemClock};
pub use types::{Reading, ReadingStatus, SensorType};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
