//! Dashboard settings
//!
//! Operators pick from fixed menus, so validation accepts only the offered
//! values:
//!
//! ```text
//! autoRefreshInterval  5 | 10 | 30 | 60   seconds
//! dataRetentionDays    7 | 14 | 30 | 90   days
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use phosphosense_core::{constants::HOURS_PER_DAY, ConfigError, SimulationConfig};

/// Refresh intervals offered to operators (seconds)
pub const REFRESH_INTERVALS_SECS: [u32; 4] = [5, 10, 30, 60];

/// Retention periods offered to operators (days)
pub const RETENTION_DAYS: [u32; 4] = [7, 14, 30, 90];

/// Operator-facing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Dark colour scheme
    pub dark_mode: bool,
    /// Show alert notifications
    pub notifications_enabled: bool,
    /// Seconds between automatic sensor refreshes
    pub auto_refresh_interval: u32,
    /// How many days of history charts may cover
    pub data_retention_days: u32,
    /// Play a sound on new alerts
    pub sound_alerts: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications_enabled: true,
            auto_refresh_interval: 30,
            data_retention_days: 30,
            sound_alerts: false,
        }
    }
}

impl AppSettings {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the numeric settings are among the offered values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !REFRESH_INTERVALS_SECS.contains(&self.auto_refresh_interval) {
            return Err(ConfigError::Invalid {
                field: "autoRefreshInterval",
                reason: "must be one of 5, 10, 30 or 60 seconds",
            });
        }

        if !RETENTION_DAYS.contains(&self.data_retention_days) {
            return Err(ConfigError::Invalid {
                field: "dataRetentionDays",
                reason: "must be one of 7, 14, 30 or 90 days",
            });
        }

        Ok(())
    }

    /// Flip dark mode
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Flip notifications
    pub fn toggle_notifications(&mut self) {
        self.notifications_enabled = !self.notifications_enabled;
    }

    /// Flip sound alerts
    pub fn toggle_sound_alerts(&mut self) {
        self.sound_alerts = !self.sound_alerts;
    }

    /// Change the refresh interval, rejecting values not offered
    pub fn set_auto_refresh_interval(&mut self, secs: u32) -> Result<(), ConfigError> {
        let updated = Self {
            auto_refresh_interval: secs,
            ..self.clone()
        };
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Change the retention period, rejecting values not offered
    pub fn set_data_retention_days(&mut self, days: u32) -> Result<(), ConfigError> {
        let updated = Self {
            data_retention_days: days,
            ..self.clone()
        };
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Interval between automatic refreshes
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.auto_refresh_interval))
    }

    /// Retention period in hours
    pub fn retention_window_hours(&self) -> u32 {
        self.data_retention_days.saturating_mul(HOURS_PER_DAY)
    }

    /// Cap a simulation config's history window at the retention period
    pub fn bound_simulation(&self, config: &SimulationConfig) -> SimulationConfig {
        let max_window_hours = config.max_window_hours.min(self.retention_window_hours());
        SimulationConfig {
            max_window_hours,
            default_window_hours: config.default_window_hours.min(max_window_hours),
            ..config.clone()
        }
    }
}
