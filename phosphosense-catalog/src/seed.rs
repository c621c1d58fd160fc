//! Seeded facility fixture
//!
//! The demonstration plant: seven sensors across the stacks, storage area,
//! treatment plant and discharge point, with the alerts and treatment
//! recommendations operators see on first load. Times are relative to the
//! simulator's clock. Each current reading comes from the simulator, stamped
//! at the sensor's `last_updated`.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use phosphosense_core::{Clock, SensorType, Simulator};

use crate::{
    alerts::AlertBoard,
    errors::CatalogResult,
    model::{Alert, AlertSeverity, Priority, Sensor, SensorStatus, TreatmentRecommendation},
    registry::SensorRegistry,
};

/// A registry and alert board populated together
#[derive(Debug)]
pub struct Plant {
    /// Registered sensors
    pub registry: SensorRegistry,
    /// Alerts and recommendations
    pub board: AlertBoard,
}

struct SensorSeed {
    id: &'static str,
    reading_id: &'static str,
    name: &'static str,
    sensor_type: SensorType,
    location: &'static str,
    status: SensorStatus,
    stale_hours: i64,
    description: &'static str,
    role: &'static str,
}

const SENSORS: [SensorSeed; 7] = [
    SensorSeed {
        id: "s001",
        reading_id: "r001",
        name: "Main Stack pH",
        sensor_type: SensorType::Ph,
        location: "Stack A - Primary",
        status: SensorStatus::Online,
        stale_hours: 0,
        description: "Monitors acidity levels in the main processing stack",
        role: "Controls neutralization process and ensures safe chemical balance",
    },
    SensorSeed {
        id: "s002",
        reading_id: "r002",
        name: "Radiation Monitor 1",
        sensor_type: SensorType::Radiation,
        location: "Storage Area - North",
        status: SensorStatus::Online,
        stale_hours: 0,
        description: "Measures radiation levels in storage area",
        role: "Ensures radiation safety and compliance with regulatory limits",
    },
    SensorSeed {
        id: "s003",
        reading_id: "r003",
        name: "Process Temperature",
        sensor_type: SensorType::Temperature,
        location: "Treatment Plant - Unit 3",
        status: SensorStatus::Online,
        stale_hours: 0,
        description: "Monitors process temperature in treatment unit",
        role: "Maintains optimal reaction conditions and prevents overheating",
    },
    SensorSeed {
        id: "s004",
        reading_id: "r004",
        name: "Ambient Humidity",
        sensor_type: SensorType::Humidity,
        location: "Stack B - Secondary",
        status: SensorStatus::Offline,
        stale_hours: 1,
        description: "Measures ambient humidity levels",
        role: "Prevents moisture-related issues and ensures proper drying",
    },
    SensorSeed {
        id: "s005",
        reading_id: "r005",
        name: "System Pressure",
        sensor_type: SensorType::Pressure,
        location: "Filtration System",
        status: SensorStatus::Maintenance,
        stale_hours: 0,
        description: "Monitors filtration system pressure",
        role: "Maintains optimal filtration efficiency and prevents system damage",
    },
    SensorSeed {
        id: "s006",
        reading_id: "r006",
        name: "Effluent pH",
        sensor_type: SensorType::Ph,
        location: "Discharge Point",
        status: SensorStatus::Online,
        stale_hours: 0,
        description: "Monitors pH levels at discharge point",
        role: "Ensures environmental compliance of discharged water",
    },
    SensorSeed {
        id: "s007",
        reading_id: "r007",
        name: "Phosphogypsum Monitor",
        sensor_type: SensorType::Phosphogypsum,
        location: "Processing Unit - Main",
        status: SensorStatus::Online,
        stale_hours: 0,
        description: "Measures phosphogypsum concentration",
        role: "Monitors waste product levels and ensures proper processing",
    },
];

impl Plant {
    /// Build the demonstration plant using the simulator for readings and time
    pub fn seeded<C: Clock, R: Rng>(simulator: &mut Simulator<C, R>) -> CatalogResult<Self> {
        let now = simulator.clock().now();
        let registry = SensorRegistry::new();

        for seed in &SENSORS {
            let last_updated = now - Duration::hours(seed.stale_hours);
            let current_reading =
                simulator.reading_at(seed.reading_id, seed.sensor_type, last_updated);
            registry.register(Sensor {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                sensor_type: seed.sensor_type,
                location: seed.location.to_string(),
                current_reading,
                status: seed.status,
                last_updated,
                description: seed.description.to_string(),
                role: seed.role.to_string(),
            })?;
        }

        let board = AlertBoard::with_entries(seed_alerts(now), seed_recommendations(now))?;
        log::info!(
            "Seeded plant with {} sensors, {} alerts, {} recommendations",
            SENSORS.len(),
            board.alerts().len(),
            board.recommendations().len()
        );

        Ok(Self { registry, board })
    }
}

fn alert(
    id: &str,
    title: &str,
    message: &str,
    severity: AlertSeverity,
    timestamp: DateTime<Utc>,
    sensor_id: &str,
    acknowledged: bool,
) -> Alert {
    Alert {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        severity,
        timestamp,
        sensor_id: sensor_id.to_string(),
        acknowledged,
        recommendation_id: None,
    }
}

fn seed_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        alert(
            "a001",
            "High pH Level Detected",
            "pH level at Stack A has exceeded the warning threshold of 8.0",
            AlertSeverity::Warning,
            now - Duration::minutes(30),
            "s001",
            false,
        ),
        alert(
            "a002",
            "Radiation Level Critical",
            "Radiation level at Storage Area - North has reached critical levels",
            AlertSeverity::Critical,
            now - Duration::hours(1),
            "s002",
            true,
        ),
        alert(
            "a003",
            "Sensor Offline",
            "Humidity sensor at Stack B is offline",
            AlertSeverity::Info,
            now - Duration::days(1),
            "s004",
            false,
        ),
        alert(
            "a004",
            "Temperature Rising",
            "Process temperature is showing an upward trend at Unit 3",
            AlertSeverity::Warning,
            now - Duration::hours(2),
            "s003",
            false,
        ),
        alert(
            "a005",
            "High Phosphogypsum Concentration",
            "Phosphogypsum levels exceeding normal operating range",
            AlertSeverity::Warning,
            now,
            "s007",
            false,
        ),
    ]
}

fn recommendation(
    id: &str,
    title: &str,
    description: &str,
    priority: Priority,
    timestamp: DateTime<Utc>,
    related_sensors: &[&str],
) -> TreatmentRecommendation {
    TreatmentRecommendation {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        priority,
        timestamp,
        related_sensors: related_sensors.iter().map(|s| s.to_string()).collect(),
        alert_id: None,
    }
}

fn seed_recommendations(now: DateTime<Utc>) -> Vec<TreatmentRecommendation> {
    vec![
        recommendation(
            "tr001",
            "Adjust pH Neutralization System",
            "Current pH readings indicate the need to increase lime dosage in the neutralization \
             process by 15% to bring levels within optimal range.",
            Priority::High,
            now,
            &["s001", "s006"],
        ),
        recommendation(
            "tr002",
            "Investigate Radiation Source",
            "Elevated radiation levels require immediate investigation. Initial assessment \
             suggests checking for leakage in the northern storage containment area.",
            Priority::Critical,
            now - Duration::hours(1),
            &["s002"],
        ),
        recommendation(
            "tr003",
            "Optimize Cooling System",
            "Temperature trends suggest the need for cooling system optimization. Consider \
             increasing coolant flow by 10% and check for fouling in heat exchangers.",
            Priority::Medium,
            now - Duration::days(1),
            &["s003"],
        ),
        recommendation(
            "tr004",
            "Schedule Humidity Sensor Maintenance",
            "The humidity sensor appears to be offline. Schedule a maintenance check for potential \
             calibration issues or physical damage.",
            Priority::Low,
            now - Duration::days(2),
            &["s004"],
        ),
        recommendation(
            "tr005",
            "Adjust Phosphogypsum Processing Rate",
            "High phosphogypsum concentration detected. Consider reducing processing rate by \
             20% and verify filtration system efficiency.",
            Priority::High,
            now,
            &["s007", "s005"],
        ),
    ]
}
