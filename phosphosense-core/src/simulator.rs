//! Simulator facade
//!
//! Bundles a clock, a random source and a [`SimulationConfig`] so callers do
//! not thread them through every call. Two families of methods:
//!
//! - Typed (`reading`, `history`): take a [`SensorType`] and a `u32` window.
//!   Readings cannot fail; histories longer than `max_window_hours` are
//!   rejected.
//! - Named (`reading_named`, `history_named`): take text and a signed window
//!   from outside the crate and reject bad input with [`SimulationError`].
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use phosphosense_core::{FixedClock, SensorType, SimulationConfig, Simulator};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
//! let mut simulator = Simulator::with_parts(
//!     FixedClock::new(now),
//!     StdRng::seed_from_u64(42),
//!     SimulationConfig::default(),
//! );
//!
//! let series = simulator.history("s005", SensorType::Pressure, 24)?;
//! assert_eq!(series.last().map(|r| r.timestamp), Some(now));
//! # Ok::<(), phosphosense_core::SimulationError>(())
//! ```

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::SimulationConfig,
    errors::{SimulationError, SimulationResult},
    generator::generate_reading,
    history::RandomWalk,
    time::{Clock, FixedClock, SystemClock},
    types::{Reading, SensorType},
};

/// Reading and history generator with injected clock and random source
#[derive(Debug, Clone)]
pub struct Simulator<C = SystemClock, R = StdRng> {
    clock: C,
    rng: R,
    config: SimulationConfig,
}

impl Simulator<SystemClock, StdRng> {
    /// System clock, entropy-seeded random source, default config
    pub fn new() -> Self {
        Self::from_config(SimulationConfig::default())
    }

    /// System clock with a reproducible random source
    pub fn seeded(seed: u64) -> Self {
        Self::from_config(SimulationConfig::seeded(seed))
    }

    /// System clock; the random source is seeded from `config.seed` if set
    pub fn from_config(config: SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_parts(SystemClock, rng, config)
    }
}

impl Default for Simulator<SystemClock, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, R: Rng> Simulator<C, R> {
    /// Assemble from explicit parts
    pub fn with_parts(clock: C, rng: R, config: SimulationConfig) -> Self {
        Self { clock, rng, config }
    }

    /// Active configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The injected clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access to the clock, e.g. to advance a `FixedClock`
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// One reading stamped with the clock's current time
    pub fn reading(&mut self, id: &str, sensor_type: SensorType) -> Reading {
        generate_reading(id, sensor_type, &self.clock, &mut self.rng)
    }

    /// One reading stamped at `timestamp` instead of the clock's time
    pub fn reading_at(
        &mut self,
        id: &str,
        sensor_type: SensorType,
        timestamp: DateTime<Utc>,
    ) -> Reading {
        generate_reading(id, sensor_type, &FixedClock::new(timestamp), &mut self.rng)
    }

    /// `hours + 1` hourly readings, oldest first, ending now
    ///
    /// Windows longer than `max_window_hours` are rejected.
    pub fn history(
        &mut self,
        sensor_id: &str,
        sensor_type: SensorType,
        hours: u32,
    ) -> SimulationResult<Vec<Reading>> {
        let hours = self.check_window(i64::from(hours))?;
        RandomWalk::new(self.config.walk_step_fraction).generate(
            sensor_id,
            sensor_type,
            hours,
            &self.clock,
            &mut self.rng,
        )
    }

    /// History over the configured default window
    pub fn default_history(
        &mut self,
        sensor_id: &str,
        sensor_type: SensorType,
    ) -> SimulationResult<Vec<Reading>> {
        self.history(sensor_id, sensor_type, self.config.default_window_hours)
    }

    /// Reading for a sensor type given by name
    pub fn reading_named(&mut self, id: &str, sensor_type: &str) -> SimulationResult<Reading> {
        let sensor_type = sensor_type.parse()?;
        Ok(self.reading(id, sensor_type))
    }

    /// History for a sensor type given by name over a signed window
    pub fn history_named(
        &mut self,
        sensor_id: &str,
        sensor_type: &str,
        hours: i64,
    ) -> SimulationResult<Vec<Reading>> {
        let sensor_type = sensor_type.parse()?;
        let hours = self.check_window(hours)?;
        self.history(sensor_id, sensor_type, hours)
    }

    /// Accept a window in `0..=max_window_hours`
    pub fn check_window(&self, hours: i64) -> SimulationResult<u32> {
        let max = self.config.max_window_hours;
        u32::try_from(hours)
            .ok()
            .filter(|&h| h <= max)
            .ok_or(SimulationError::InvalidWindow { hours, max })
    }
}
