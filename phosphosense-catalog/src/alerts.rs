//! Alerts and treatment recommendations
//!
//! Alerts point at sensors through `sensor_id`; recommendations point at
//! alerts through `alert_id` and at sensors through `related_sensors`. The
//! board keeps both lists in insertion order and resolves those links. Ids
//! are unique within each list.

use chrono::{DateTime, Utc};
use log::info;

use crate::{
    errors::{CatalogError, CatalogResult},
    model::{Alert, AlertSeverity, Sensor, TreatmentRecommendation},
};

/// Alert list plus the recommendations that answer them
#[derive(Debug, Clone, Default)]
pub struct AlertBoard {
    alerts: Vec<Alert>,
    recommendations: Vec<TreatmentRecommendation>,
}

impl AlertBoard {
    /// Empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Board preloaded with alerts and recommendations
    pub fn with_entries(
        alerts: Vec<Alert>,
        recommendations: Vec<TreatmentRecommendation>,
    ) -> CatalogResult<Self> {
        let mut board = Self::new();
        for alert in alerts {
            board.push_alert(alert)?;
        }
        for recommendation in recommendations {
            board.push_recommendation(recommendation)?;
        }
        Ok(board)
    }

    /// Add an alert; its id must not already be on the board
    pub fn push_alert(&mut self, alert: Alert) -> CatalogResult<()> {
        if self.has_alert(&alert.id) {
            return Err(CatalogError::DuplicateAlert { id: alert.id });
        }
        self.alerts.push(alert);
        Ok(())
    }

    /// Add a recommendation; its id must not already be on the board
    pub fn push_recommendation(
        &mut self,
        recommendation: TreatmentRecommendation,
    ) -> CatalogResult<()> {
        if self.recommendations.iter().any(|r| r.id == recommendation.id) {
            return Err(CatalogError::DuplicateRecommendation { id: recommendation.id });
        }
        self.recommendations.push(recommendation);
        Ok(())
    }

    fn has_alert(&self, alert_id: &str) -> bool {
        self.alerts.iter().any(|a| a.id == alert_id)
    }

    /// Every alert, in insertion order
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Every recommendation, in insertion order
    pub fn recommendations(&self) -> &[TreatmentRecommendation] {
        &self.recommendations
    }

    /// Look up an alert
    pub fn alert(&self, alert_id: &str) -> CatalogResult<&Alert> {
        self.alerts
            .iter()
            .find(|a| a.id == alert_id)
            .ok_or_else(|| CatalogError::AlertNotFound { id: alert_id.to_string() })
    }

    /// Mark an alert as seen; acknowledging twice is a no-op
    pub fn acknowledge(&mut self, alert_id: &str) -> CatalogResult<()> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|a| a.id == alert_id)
            .ok_or_else(|| CatalogError::AlertNotFound { id: alert_id.to_string() })?;

        if !alert.acknowledged {
            info!("Alert {} acknowledged ({})", alert.id, alert.title);
            alert.acknowledged = true;
        }
        Ok(())
    }

    /// Remove an alert from the board
    pub fn dismiss(&mut self, alert_id: &str) -> CatalogResult<Alert> {
        let pos = self
            .alerts
            .iter()
            .position(|a| a.id == alert_id)
            .ok_or_else(|| CatalogError::AlertNotFound { id: alert_id.to_string() })?;

        Ok(self.alerts.remove(pos))
    }

    /// Alerts not yet acknowledged
    pub fn active(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| !a.acknowledged)
    }

    /// Alerts concerning one sensor
    pub fn for_sensor<'a>(&'a self, sensor_id: &'a str) -> impl Iterator<Item = &'a Alert> {
        self.alerts.iter().filter(move |a| a.sensor_id == sensor_id)
    }

    /// Recommendations answering one alert
    ///
    /// Follows both link directions: `alert_id` on the recommendation and
    /// `recommendation_id` on the alert.
    pub fn recommendations_for_alert(&self, alert_id: &str) -> Vec<&TreatmentRecommendation> {
        let linked = self
            .alerts
            .iter()
            .find(|a| a.id == alert_id)
            .and_then(|a| a.recommendation_id.as_deref());

        self.recommendations
            .iter()
            .filter(|r| r.alert_id.as_deref() == Some(alert_id) || Some(r.id.as_str()) == linked)
            .collect()
    }

    /// Recommendations that list a sensor among their related sensors
    pub fn recommendations_for_sensor<'a>(
        &'a self,
        sensor_id: &'a str,
    ) -> impl Iterator<Item = &'a TreatmentRecommendation> {
        self.recommendations
            .iter()
            .filter(move |r| r.related_sensors.iter().any(|s| s == sensor_id))
    }

    /// Recommendations sorted most urgent first, newest first within a priority
    pub fn recommendations_by_priority(&self) -> Vec<&TreatmentRecommendation> {
        let mut sorted: Vec<_> = self.recommendations.iter().collect();
        sorted.sort_by(|a, b| b.priority.cmp(&a.priority).then(b.timestamp.cmp(&a.timestamp)));
        sorted
    }

    /// Raise an alert for a sensor whose current reading is out of band
    ///
    /// Returns the new alert, or `None` when the reading is normal.
    pub fn raise_for(
        &mut self,
        alert_id: &str,
        sensor: &Sensor,
        now: DateTime<Utc>,
    ) -> CatalogResult<Option<&Alert>> {
        if self.has_alert(alert_id) {
            return Err(CatalogError::DuplicateAlert { id: alert_id.to_string() });
        }

        let reading = &sensor.current_reading;
        let Some(severity) = AlertSeverity::for_status(reading.status) else {
            return Ok(None);
        };

        let alert = Alert {
            id: alert_id.to_string(),
            title: format!("{} {}", sensor.name, reading.status),
            message: format!(
                "{} at {} reads {} {} ({:+.2}% from baseline {})",
                sensor.name,
                sensor.location,
                reading.value,
                reading.unit,
                reading.change,
                reading.mean
            ),
            severity,
            timestamp: now,
            sensor_id: sensor.id.clone(),
            acknowledged: false,
            recommendation_id: None,
        };

        info!("Raised {:?} alert {} for sensor {}", severity, alert.id, sensor.id);
        self.alerts.push(alert);
        Ok(self.alerts.last())
    }
}
