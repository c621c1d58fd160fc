//! Sensor types, statuses and the reading record
//!
//! A `Reading` is immutable once built. The only constructor,
//! [`Reading::classified`], derives unit, baseline mean, percent change and
//! status from the profile table, so a reading can never disagree with the
//! thresholds of its type.

use chrono::{DateTime, SecondsFormat, Utc};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::{
    classify::classify,
    errors::SimulationError,
    profiles::profile,
    utils::{percent_change, round2},
};

/// Sensor type enumeration
///
/// Selects the unit, baseline mean, sampling range and thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SensorType {
    /// Acidity of process liquor
    Ph = 0,
    /// Dose rate from stored material
    Radiation = 1,
    /// Process temperature
    Temperature = 2,
    /// Relative humidity
    Humidity = 3,
    /// System pressure
    Pressure = 4,
    /// Airborne phosphogypsum concentration
    Phosphogypsum = 5,
    /// Machine vibration frequency
    Vibration = 6,
    /// Rotational speed
    Rpm = 7,
}

impl SensorType {
    /// Every sensor type, in table order
    pub const ALL: [SensorType; 8] = [
        SensorType::Ph,
        SensorType::Radiation,
        SensorType::Temperature,
        SensorType::Humidity,
        SensorType::Pressure,
        SensorType::Phosphogypsum,
        SensorType::Vibration,
        SensorType::Rpm,
    ];

    /// Canonical lower-case name
    pub const fn name(&self) -> &'static str {
        match self {
            SensorType::Ph => "ph",
            SensorType::Radiation => "radiation",
            SensorType::Temperature => "temperature",
            SensorType::Humidity => "humidity",
            SensorType::Pressure => "pressure",
            SensorType::Phosphogypsum => "phosphogypsum",
            SensorType::Vibration => "vibration",
            SensorType::Rpm => "rpm",
        }
    }

    /// Unit label for readings of this type
    pub fn unit(&self) -> &'static str {
        profile(*self).unit
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SensorType {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SensorType::ALL
            .iter()
            .copied()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| SimulationError::InvalidSensorType { name: s.to_string() })
    }
}

/// Three-level classification of a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    /// Within the normal operating band
    Normal,
    /// Past the warning threshold
    Warning,
    /// Past the critical threshold
    Critical,
}

impl ReadingStatus {
    /// Lower-case name as shown on status badges
    pub const fn name(&self) -> &'static str {
        match self {
            ReadingStatus::Normal => "normal",
            ReadingStatus::Warning => "warning",
            ReadingStatus::Critical => "critical",
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One instantaneous measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Reading identifier
    pub id: String,
    /// When the value was taken
    pub timestamp: DateTime<Utc>,
    /// Measured value, rounded to 2 decimals
    pub value: f64,
    /// Unit label
    pub unit: String,
    /// Threshold classification of `value`
    pub status: ReadingStatus,
    /// Fixed baseline for the sensor type
    pub mean: f64,
    /// Percent deviation of `value` from `mean`, rounded to 2 decimals
    pub change: f64,
}

impl Reading {
    /// Build a reading, deriving everything except the value from the type
    pub fn classified(
        id: impl Into<String>,
        timestamp: DateTime<Utc>,
        sensor_type: SensorType,
        value: f64,
    ) -> Self {
        let profile = profile(sensor_type);
        let value = round2(value);

        Self {
            id: id.into(),
            timestamp,
            value,
            unit: profile.unit.to_string(),
            status: classify(sensor_type, value),
            mean: profile.mean,
            change: percent_change(value, profile.mean),
        }
    }

    /// Timestamp as ISO-8601 with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
