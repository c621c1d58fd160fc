//! Historical series generation
//!
//! ## Algorithm
//!
//! A history is an hourly series of `hours + 1` readings, oldest first,
//! ending exactly at the clock's "now":
//!
//! ```text
//! t = now - hours·1h    seed: one fresh reading from the reading generator
//! t = now - (i-1)·1h    walk: value = prev + δ,  δ ~ U[-0.05·prev, +0.05·prev]
//! ...
//! t = now               last walk step
//! ```
//!
//! Status is re-classified at every step, never carried over from the
//! previous point.
//!
//! ## Quantization
//!
//! Values carry 2 decimals. The perturbation is truncated toward zero at 2
//! decimals before it is applied, so rounding can never push a step past the
//! walk bound.
//!
//! ## Range
//!
//! The walk is bounded per step, not in total. Over a long window a series
//! can drift outside the range the reading generator samples from. Drifted
//! values classify like any other.

use chrono::Duration;
use rand::Rng;
use serde::Serialize;

use crate::{
    constants::{MAX_HISTORY_HOURS, WALK_STEP_FRACTION},
    errors::{SimulationError, SimulationResult},
    generator::generate_reading,
    profiles::profile,
    time::{hours_before, Clock, FixedClock},
    types::{Reading, ReadingStatus, SensorType},
    utils::{round2, trunc2},
};

/// Generate an hourly history with the default walk step
pub fn generate_historical_data<C, R>(
    sensor_id: &str,
    sensor_type: SensorType,
    hours: u32,
    clock: &C,
    rng: &mut R,
) -> SimulationResult<Vec<Reading>>
where
    C: Clock + ?Sized,
    R: Rng,
{
    RandomWalk::default().generate(sensor_id, sensor_type, hours, clock, rng)
}

/// Identifier of the point `hours_ago` hours before now
pub fn point_id(sensor_id: &str, hours_ago: u32) -> String {
    format!("{sensor_id}-hist-{hours_ago}")
}

/// Bounded random walk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomWalk {
    step_fraction: f64,
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self {
            step_fraction: WALK_STEP_FRACTION,
        }
    }
}

impl RandomWalk {
    /// Walk whose steps are at most `step_fraction` of the previous value
    pub fn new(step_fraction: f64) -> Self {
        Self {
            step_fraction: step_fraction.abs(),
        }
    }

    /// Largest step fraction this walk takes
    pub fn step_fraction(&self) -> f64 {
        self.step_fraction
    }

    /// Largest allowed move away from `previous`
    pub fn bound(&self, previous: f64) -> f64 {
        (previous * self.step_fraction).abs()
    }

    /// Take one step from `previous`
    pub fn step<R: Rng>(&self, previous: f64, rng: &mut R) -> f64 {
        let bound = self.bound(previous);
        let delta = if bound > 0.0 {
            rng.gen_range(-bound..=bound)
        } else {
            0.0
        };

        round2(previous + trunc2(delta))
    }

    /// Generate `hours + 1` hourly readings ending at `clock.now()`
    ///
    /// Fails when the first point would fall before the earliest
    /// representable instant.
    pub fn generate<C, R>(
        &self,
        sensor_id: &str,
        sensor_type: SensorType,
        hours: u32,
        clock: &C,
        rng: &mut R,
    ) -> SimulationResult<Vec<Reading>>
    where
        C: Clock + ?Sized,
        R: Rng,
    {
        let start = hours_before(clock.now(), hours)
            .ok_or(SimulationError::WindowOutOfRange { hours })?;

        log_debug!(
            "Generating {}h history for {} ({})",
            hours,
            sensor_id,
            sensor_type
        );

        let mut data = Vec::with_capacity(hours.min(MAX_HISTORY_HOURS) as usize + 1);

        let seed_clock = FixedClock::new(start);
        let mut previous =
            generate_reading(&point_id(sensor_id, hours), sensor_type, &seed_clock, rng);

        for hours_ago in (0..hours).rev() {
            let value = self.step(previous.value, rng);
            let timestamp = previous.timestamp + Duration::hours(1);
            let next =
                Reading::classified(point_id(sensor_id, hours_ago), timestamp, sensor_type, value);
            data.push(previous);
            previous = next;
        }
        data.push(previous);

        let profile = profile(sensor_type);
        let drifted = data.iter().filter(|r| !profile.in_range(r.value)).count();
        if drifted > 0 {
            log_warn!(
                "History for {} drifted outside {}..={} {} at {} of {} points",
                sensor_id,
                profile.min,
                profile.max,
                profile.unit,
                drifted,
                data.len()
            );
        }

        Ok(data)
    }
}

/// Summary of a generated series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    /// Smallest value in the series
    pub min: f64,
    /// Largest value in the series
    pub max: f64,
    /// Status of the most recent point
    pub latest_status: ReadingStatus,
    /// Points classified normal
    pub normal: usize,
    /// Points classified warning
    pub warning: usize,
    /// Points classified critical
    pub critical: usize,
}

impl HistoryStats {
    /// Summarize a series; `None` when it is empty
    pub fn from_readings(readings: &[Reading]) -> Option<Self> {
        let latest = readings.last()?;

        let mut stats = Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            latest_status: latest.status,
            normal: 0,
            warning: 0,
            critical: 0,
        };

        for reading in readings {
            stats.min = stats.min.min(reading.value);
            stats.max = stats.max.max(reading.value);
            match reading.status {
                ReadingStatus::Normal => stats.normal += 1,
                ReadingStatus::Warning => stats.warning += 1,
                ReadingStatus::Critical => stats.critical += 1,
            }
        }

        Some(stats)
    }

    /// Worst status seen anywhere in the series
    pub fn worst_status(&self) -> ReadingStatus {
        if self.critical > 0 {
            ReadingStatus::Critical
        } else if self.warning > 0 {
            ReadingStatus::Warning
        } else {
            ReadingStatus::Normal
        }
    }
}
