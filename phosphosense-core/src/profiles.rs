//! Per-Type Sensor Profiles
//!
//! One static table row per sensor type: sampling range, unit, baseline mean
//! and the threshold rule used for classification.
//!
//! ```text
//! type           range          unit    mean   warning          critical
//! ph             5.0 - 9.0      pH      7      <6  or >8        <5.5 or >8.5
//! radiation      0 - 150        μSv/h   75     >80              >120
//! temperature    15 - 45        °C      25     >35              >40
//! humidity       30 - 80        %       50     >70              >75
//! pressure       980 - 1040     hPa     1013   <1000            <990
//! phosphogypsum  0 - 1000       mg/m³   500    >500             >750
//! vibration      0 - 100        Hz      50     >70              >85
//! rpm            1000 - 3000    RPM     2000   >2500            >2800
//! ```
//!
//! All comparisons are strict: pH 6.0 is normal, pH 8.5 is a warning.

use serde::Serialize;

use crate::types::{ReadingStatus, SensorType};

/// Warning and critical bounds for one sensor type
///
/// A side without a bound never fires. Most types only alert on high
/// values, pressure only on low values, and pH on both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdRule {
    /// Values strictly below this are at least a warning
    pub warning_low: Option<f64>,
    /// Values strictly above this are at least a warning
    pub warning_high: Option<f64>,
    /// Values strictly below this are critical
    pub critical_low: Option<f64>,
    /// Values strictly above this are critical
    pub critical_high: Option<f64>,
}

impl ThresholdRule {
    /// Rule that alerts on high values only
    pub const fn high(warning: f64, critical: f64) -> Self {
        Self {
            warning_low: None,
            warning_high: Some(warning),
            critical_low: None,
            critical_high: Some(critical),
        }
    }

    /// Rule that alerts on low values only
    pub const fn low(warning: f64, critical: f64) -> Self {
        Self {
            warning_low: Some(warning),
            warning_high: None,
            critical_low: Some(critical),
            critical_high: None,
        }
    }

    /// Rule that alerts outside a band on either side
    pub const fn band(warning: (f64, f64), critical: (f64, f64)) -> Self {
        Self {
            warning_low: Some(warning.0),
            warning_high: Some(warning.1),
            critical_low: Some(critical.0),
            critical_high: Some(critical.1),
        }
    }

    /// Whether the warning condition holds
    pub fn is_warning(&self, value: f64) -> bool {
        outside(value, self.warning_low, self.warning_high)
    }

    /// Whether the critical condition holds
    pub fn is_critical(&self, value: f64) -> bool {
        outside(value, self.critical_low, self.critical_high)
    }

    /// Classify a value: warning first, then critical overrides it
    pub fn classify(&self, value: f64) -> ReadingStatus {
        if !value.is_finite() {
            return ReadingStatus::Critical;
        }

        let mut status = ReadingStatus::Normal;
        if self.is_warning(value) {
            status = ReadingStatus::Warning;
        }
        if self.is_critical(value) {
            status = ReadingStatus::Critical;
        }
        status
    }
}

fn outside(value: f64, low: Option<f64>, high: Option<f64>) -> bool {
    low.is_some_and(|low| value < low) || high.is_some_and(|high| value > high)
}

/// Static description of a sensor type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorProfile {
    /// Type this row describes
    pub sensor_type: SensorType,
    /// Unit label
    pub unit: &'static str,
    /// Lower end of the sampling range
    pub min: f64,
    /// Upper end of the sampling range
    pub max: f64,
    /// Baseline mean for percent change
    pub mean: f64,
    /// Classification thresholds
    pub thresholds: ThresholdRule,
}

impl SensorProfile {
    /// Whether a value lies within the documented sampling range
    pub fn in_range(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Profile table, indexed by `SensorType as usize`
pub static PROFILES: [SensorProfile; 8] = [
    SensorProfile {
        sensor_type: SensorType::Ph,
        unit: "pH",
        min: 5.0,
        max: 9.0,
        mean: 7.0,
        thresholds: ThresholdRule::band((6.0, 8.0), (5.5, 8.5)),
    },
    SensorProfile {
        sensor_type: SensorType::Radiation,
        unit: "μSv/h",
        min: 0.0,
        max: 150.0,
        mean: 75.0,
        thresholds: ThresholdRule::high(80.0, 120.0),
    },
    SensorProfile {
        sensor_type: SensorType::Temperature,
        unit: "°C",
        min: 15.0,
        max: 45.0,
        mean: 25.0,
        thresholds: ThresholdRule::high(35.0, 40.0),
    },
    SensorProfile {
        sensor_type: SensorType::Humidity,
        unit: "%",
        min: 30.0,
        max: 80.0,
        mean: 50.0,
        thresholds: ThresholdRule::high(70.0, 75.0),
    },
    SensorProfile {
        sensor_type: SensorType::Pressure,
        unit: "hPa",
        min: 980.0,
        max: 1040.0,
        mean: 1013.0,
        thresholds: ThresholdRule::low(1000.0, 990.0),
    },
    SensorProfile {
        sensor_type: SensorType::Phosphogypsum,
        unit: "mg/m³",
        min: 0.0,
        max: 1000.0,
        mean: 500.0,
        thresholds: ThresholdRule::high(500.0, 750.0),
    },
    SensorProfile {
        sensor_type: SensorType::Vibration,
        unit: "Hz",
        min: 0.0,
        max: 100.0,
        mean: 50.0,
        thresholds: ThresholdRule::high(70.0, 85.0),
    },
    SensorProfile {
        sensor_type: SensorType::Rpm,
        unit: "RPM",
        min: 1000.0,
        max: 3000.0,
        mean: 2000.0,
        thresholds: ThresholdRule::high(2500.0, 2800.0),
    },
];

/// Look up the profile for a sensor type
pub fn profile(sensor_type: SensorType) -> &'static SensorProfile {
    &PROFILES[sensor_type as usize]
}
