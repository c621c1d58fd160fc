//! Sensor Registry
//!
//! Thread-safe store of registered sensors keyed by id. Readers take a
//! snapshot (`get`, `list`); a refresh swaps in a fresh current reading
//! under the write lock. Readings themselves are never mutated.

use log::{debug, info};
use rand::Rng;
use std::collections::BTreeMap;
use std::sync::RwLock;

use phosphosense_core::{Clock, Reading, Simulator};

use crate::{
    errors::{CatalogError, CatalogResult},
    model::{Sensor, SensorStatus},
};

/// Registry of plant sensors
#[derive(Debug, Default)]
pub struct SensorRegistry {
    /// Sensors indexed by id
    sensors: RwLock<BTreeMap<String, Sensor>>,
}

impl SensorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new sensor
    pub fn register(&self, sensor: Sensor) -> CatalogResult<()> {
        let mut sensors = self.sensors.write().map_err(|_| CatalogError::LockPoisoned)?;

        if sensors.contains_key(&sensor.id) {
            return Err(CatalogError::DuplicateSensor { id: sensor.id });
        }

        debug!("Registered sensor {} ({}, {})", sensor.id, sensor.sensor_type, sensor.location);
        sensors.insert(sensor.id.clone(), sensor);
        Ok(())
    }

    /// Snapshot of one sensor
    pub fn get(&self, id: &str) -> CatalogResult<Sensor> {
        let sensors = self.sensors.read().map_err(|_| CatalogError::LockPoisoned)?;

        sensors
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::SensorNotFound { id: id.to_string() })
    }

    /// Snapshot of every sensor, ordered by id
    pub fn list(&self) -> CatalogResult<Vec<Sensor>> {
        let sensors = self.sensors.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(sensors.values().cloned().collect())
    }

    /// Number of registered sensors
    pub fn len(&self) -> CatalogResult<usize> {
        let sensors = self.sensors.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(sensors.len())
    }

    /// Whether no sensors are registered
    pub fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Change a sensor's lifecycle state
    pub fn set_status(&self, id: &str, status: SensorStatus) -> CatalogResult<()> {
        let mut sensors = self.sensors.write().map_err(|_| CatalogError::LockPoisoned)?;

        let sensor = sensors
            .get_mut(id)
            .ok_or_else(|| CatalogError::SensorNotFound { id: id.to_string() })?;

        if sensor.status != status {
            info!("Sensor {} is now {} (was {})", id, status, sensor.status);
            sensor.status = status;
        }
        Ok(())
    }

    /// Replace a sensor's current reading with a freshly generated one
    ///
    /// The new reading keeps the id of the one it replaces. Offline sensors
    /// are not refreshed.
    pub fn refresh<C: Clock, R: Rng>(
        &self,
        id: &str,
        simulator: &mut Simulator<C, R>,
    ) -> CatalogResult<Reading> {
        let mut sensors = self.sensors.write().map_err(|_| CatalogError::LockPoisoned)?;

        let sensor = sensors
            .get_mut(id)
            .ok_or_else(|| CatalogError::SensorNotFound { id: id.to_string() })?;

        if sensor.status == SensorStatus::Offline {
            return Err(CatalogError::SensorOffline { id: id.to_string() });
        }

        let reading = simulator.reading(&sensor.current_reading.id, sensor.sensor_type);
        sensor.last_updated = reading.timestamp;
        sensor.current_reading = reading.clone();

        debug!("Refreshed {}: {} {} ({})", id, reading.value, reading.unit, reading.status);
        Ok(reading)
    }

    /// Refresh every sensor that is not offline; returns how many were refreshed
    pub fn refresh_all<C: Clock, R: Rng>(
        &self,
        simulator: &mut Simulator<C, R>,
    ) -> CatalogResult<usize> {
        let ids: Vec<String> = {
            let sensors = self.sensors.read().map_err(|_| CatalogError::LockPoisoned)?;
            sensors
                .values()
                .filter(|s| s.status != SensorStatus::Offline)
                .map(|s| s.id.clone())
                .collect()
        };

        for id in &ids {
            self.refresh(id, simulator)?;
        }

        info!("Refreshed {} sensors", ids.len());
        Ok(ids.len())
    }

    /// Hourly history for a registered sensor
    ///
    /// Windows longer than the simulator's `max_window_hours` are rejected.
    pub fn history<C: Clock, R: Rng>(
        &self,
        id: &str,
        hours: u32,
        simulator: &mut Simulator<C, R>,
    ) -> CatalogResult<Vec<Reading>> {
        let sensor_type = self.get(id)?.sensor_type;
        Ok(simulator.history(id, sensor_type, hours)?)
    }

    /// Hourly history over a signed window from external input
    pub fn history_checked<C: Clock, R: Rng>(
        &self,
        id: &str,
        hours: i64,
        simulator: &mut Simulator<C, R>,
    ) -> CatalogResult<Vec<Reading>> {
        let hours = simulator.check_window(hours)?;
        self.history(id, hours, simulator)
    }
}
