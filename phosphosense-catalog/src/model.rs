//! Catalog records
//!
//! Field names follow the dashboard's JSON: camelCase, with the sensor type
//! under `type`.

use chrono::{DateTime, Utc};
use core::fmt;
use serde::{Deserialize, Serialize};

use phosphosense_core::{Reading, ReadingStatus, SensorType};

/// Lifecycle state of a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    /// Reporting normally
    Online,
    /// Not reporting
    Offline,
    /// Reporting, but under service
    Maintenance,
}

impl SensorStatus {
    /// Lower-case name
    pub const fn name(&self) -> &'static str {
        match self {
            SensorStatus::Online => "online",
            SensorStatus::Offline => "offline",
            SensorStatus::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A registered sensor and its single current reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    /// Sensor id, e.g. `s001`
    pub id: String,
    /// Display name
    pub name: String,
    /// What the sensor measures
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    /// Where it is installed
    pub location: String,
    /// Latest reading; replaced wholesale on refresh
    pub current_reading: Reading,
    /// Lifecycle state
    pub status: SensorStatus,
    /// When the current reading was taken
    pub last_updated: DateTime<Utc>,
    /// What it monitors
    pub description: String,
    /// Why it matters to the process
    pub role: String,
}

/// Alert severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Informational only
    Info,
    /// Needs attention
    Warning,
    /// Something failed
    Error,
    /// Needs immediate action
    Critical,
}

impl AlertSeverity {
    /// Severity for an alert raised from a reading status
    ///
    /// Normal readings raise no alert.
    pub fn for_status(status: ReadingStatus) -> Option<Self> {
        match status {
            ReadingStatus::Normal => None,
            ReadingStatus::Warning => Some(AlertSeverity::Warning),
            ReadingStatus::Critical => Some(AlertSeverity::Critical),
        }
    }
}

/// An alert correlated to a sensor by `sensor_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Alert id, e.g. `a001`
    pub id: String,
    /// Short headline
    pub title: String,
    /// Full message
    pub message: String,
    /// Severity
    pub severity: AlertSeverity,
    /// When it was raised
    pub timestamp: DateTime<Utc>,
    /// Sensor the alert concerns
    pub sensor_id: String,
    /// Whether an operator has seen it
    pub acknowledged: bool,
    /// Linked recommendation, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_id: Option<String>,
}

/// Recommendation priority, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Whenever convenient
    Low,
    /// Within the shift
    Medium,
    /// As soon as possible
    High,
    /// Immediately
    Critical,
}

/// A treatment recommendation, correlated to an alert by `alert_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentRecommendation {
    /// Recommendation id, e.g. `tr001`
    pub id: String,
    /// Short headline
    pub title: String,
    /// What to do
    pub description: String,
    /// Urgency
    pub priority: Priority,
    /// When it was issued
    pub timestamp: DateTime<Utc>,
    /// Sensors whose readings motivated it
    pub related_sensors: Vec<String>,
    /// Alert it answers, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_id: Option<String>,
}
