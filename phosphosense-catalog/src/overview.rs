//! Dashboard overview and chart scaling

use serde::Serialize;

use phosphosense_core::{Reading, ReadingStatus};

use crate::{
    alerts::AlertBoard,
    errors::CatalogResult,
    model::SensorStatus,
    registry::SensorRegistry,
};

/// Padding applied below the smallest charted value
pub const CHART_LOWER_PADDING: f64 = 0.9;

/// Padding applied above the largest charted value
pub const CHART_UPPER_PADDING: f64 = 1.1;

/// Counts of current readings per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Readings classified normal
    pub normal: usize,
    /// Readings classified warning
    pub warning: usize,
    /// Readings classified critical
    pub critical: usize,
}

impl StatusCounts {
    fn add(&mut self, status: ReadingStatus) {
        match status {
            ReadingStatus::Normal => self.normal += 1,
            ReadingStatus::Warning => self.warning += 1,
            ReadingStatus::Critical => self.critical += 1,
        }
    }
}

/// Headline numbers for the system overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    /// Sensors currently online
    pub online_sensors: usize,
    /// All registered sensors
    pub total_sensors: usize,
    /// Alerts not yet acknowledged
    pub active_alerts: usize,
    /// Treatment recommendations on the board
    pub recommendations: usize,
    /// Current reading status across all sensors
    pub status_counts: StatusCounts,
}

impl DashboardOverview {
    /// Compute from the registry and the alert board
    pub fn compute(registry: &SensorRegistry, board: &AlertBoard) -> CatalogResult<Self> {
        let sensors = registry.list()?;

        let mut status_counts = StatusCounts::default();
        for sensor in &sensors {
            status_counts.add(sensor.current_reading.status);
        }

        Ok(Self {
            online_sensors: sensors.iter().filter(|s| s.status == SensorStatus::Online).count(),
            total_sensors: sensors.len(),
            active_alerts: board.active().count(),
            recommendations: board.recommendations().len(),
            status_counts,
        })
    }
}

/// Y-axis scale for a history chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartScale {
    /// Bottom of the axis
    pub min: f64,
    /// Top of the axis
    pub max: f64,
    /// Axis midpoint label
    pub mid: f64,
    /// Status of the newest point, which picks the line colour
    pub latest_status: ReadingStatus,
}

impl ChartScale {
    /// Padded scale for a series; `None` when the series is empty
    pub fn from_history(readings: &[Reading]) -> Option<Self> {
        let latest = readings.last()?;

        let (lo, hi) = readings
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r.value), hi.max(r.value))
            });

        let min = lo * CHART_LOWER_PADDING;
        let max = hi * CHART_UPPER_PADDING;

        Some(Self {
            min,
            max,
            mid: (min + max) / 2.0,
            latest_status: latest.status,
        })
    }

    /// Height of the axis
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of a value on a chart `height` units tall, 0 at the top
    ///
    /// A flat series (zero span) plots at mid-height.
    pub fn y_position(&self, value: f64, height: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            return height / 2.0;
        }
        height - (value - self.min) / span * height
    }
}
