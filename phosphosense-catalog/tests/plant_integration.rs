//! Integration tests over the seeded plant
//!
//! Core simulation + catalog: seeding, refresh, history, alerts and the
//! overview numbers the dashboard header shows.

use chrono::{Duration, TimeZone, Utc};
use rand::{rngs::StdRng, SeedableRng};

use phosphosense_catalog::{
    AlertSeverity, AppSettings, CatalogError, ChartScale, DashboardOverview, Plant, Priority,
    SensorStatus,
};
use phosphosense_core::{classify, Clock, FixedClock, SensorType, SimulationConfig, Simulator};

fn simulator(seed: u64) -> Simulator<FixedClock, StdRng> {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    Simulator::with_parts(
        FixedClock::new(now),
        StdRng::seed_from_u64(seed),
        SimulationConfig::seeded(seed),
    )
}

#[test]
fn seeded_plant_matches_the_facility() {
    let mut sim = simulator(1);
    let plant = Plant::seeded(&mut sim).unwrap();

    let sensors = plant.registry.list().unwrap();
    assert_eq!(sensors.len(), 7);

    let humidity = plant.registry.get("s004").unwrap();
    assert_eq!(humidity.status, SensorStatus::Offline);
    assert_eq!(humidity.last_updated, sim.clock().now() - Duration::hours(1));
    assert_eq!(humidity.current_reading.timestamp, humidity.last_updated);

    let pressure = plant.registry.get("s005").unwrap();
    assert_eq!(pressure.status, SensorStatus::Maintenance);
    assert_eq!(pressure.current_reading.id, "r005");

    for sensor in &sensors {
        let reading = &sensor.current_reading;
        assert_eq!(reading.timestamp, sensor.last_updated);
        assert_eq!(reading.unit, sensor.sensor_type.unit());
        assert_eq!(reading.status, classify(sensor.sensor_type, reading.value));
    }

    assert_eq!(plant.board.alerts().len(), 5);
    assert_eq!(plant.board.recommendations().len(), 5);
}

#[test]
fn overview_counts() {
    let mut sim = simulator(2);
    let mut plant = Plant::seeded(&mut sim).unwrap();

    let overview = DashboardOverview::compute(&plant.registry, &plant.board).unwrap();
    assert_eq!(overview.online_sensors, 5);
    assert_eq!(overview.total_sensors, 7);
    assert_eq!(overview.active_alerts, 4);
    assert_eq!(overview.recommendations, 5);

    let counts = overview.status_counts;
    assert_eq!(counts.normal + counts.warning + counts.critical, 7);

    plant.board.acknowledge("a001").unwrap();
    let overview = DashboardOverview::compute(&plant.registry, &plant.board).unwrap();
    assert_eq!(overview.active_alerts, 3);
}

#[test]
fn refresh_cycle_skips_offline_sensors() {
    let mut sim = simulator(3);
    let plant = Plant::seeded(&mut sim).unwrap();
    let stale = plant.registry.get("s004").unwrap();

    sim.clock_mut().advance(Duration::seconds(30));
    assert_eq!(plant.registry.refresh_all(&mut sim).unwrap(), 6);

    let now = sim.clock().now();
    for sensor in plant.registry.list().unwrap() {
        if sensor.id == "s004" {
            assert_eq!(sensor, stale);
        } else {
            assert_eq!(sensor.last_updated, now);
            assert_eq!(sensor.current_reading.timestamp, now);
        }
    }
}

#[test]
fn sensor_detail_history_and_chart() {
    let mut sim = simulator(4);
    let plant = Plant::seeded(&mut sim).unwrap();

    let history = plant.registry.history("s002", 24, &mut sim).unwrap();
    assert_eq!(history.len(), 25);
    assert!(history.iter().all(|r| r.unit == SensorType::Radiation.unit()));

    let scale = ChartScale::from_history(&history).unwrap();
    assert!(scale.min <= history.iter().map(|r| r.value).fold(f64::INFINITY, f64::min));
    assert_eq!(scale.latest_status, history[24].status);

    let err = plant.registry.history_checked("s002", -5, &mut sim).unwrap_err();
    assert!(matches!(err, CatalogError::Simulation(_)));
}

#[test]
fn recommendations_and_alerts_correlate() {
    let mut sim = simulator(5);
    let plant = Plant::seeded(&mut sim).unwrap();

    let for_s005: Vec<_> = plant
        .board
        .recommendations_for_sensor("s005")
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(for_s005, ["tr005"]);

    let radiation_alerts: Vec<_> = plant.board.for_sensor("s002").collect();
    assert_eq!(radiation_alerts.len(), 1);
    assert_eq!(radiation_alerts[0].severity, AlertSeverity::Critical);
    assert!(radiation_alerts[0].acknowledged);

    let top = plant.board.recommendations_by_priority();
    assert_eq!(top[0].priority, Priority::Critical);
    assert_eq!(top[top.len() - 1].priority, Priority::Low);
}

#[test]
fn out_of_band_refresh_raises_an_alert() {
    let mut sim = simulator(6);
    let mut plant = Plant::seeded(&mut sim).unwrap();
    let before = plant.board.alerts().len();

    // Refresh the radiation monitor until a warning or critical reading shows up
    let mut raised = false;
    for i in 0..500 {
        let reading = plant.registry.refresh("s002", &mut sim).unwrap();
        if reading.value > 80.0 {
            let sensor = plant.registry.get("s002").unwrap();
            let now = sim.clock().now();
            let alert_id = format!("a1{i:02}");
            raised = plant.board.raise_for(&alert_id, &sensor, now).unwrap().is_some();
            break;
        }
    }

    assert!(raised);
    assert_eq!(plant.board.alerts().len(), before + 1);
}

#[test]
fn settings_bound_the_history_window() {
    let settings = AppSettings {
        data_retention_days: 7,
        ..AppSettings::default()
    };
    let config = settings.bound_simulation(&SimulationConfig::seeded(7));

    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let mut sim = Simulator::with_parts(FixedClock::new(now), StdRng::seed_from_u64(7), config);
    let plant = Plant::seeded(&mut sim).unwrap();

    assert_eq!(plant.registry.history_checked("s001", 168, &mut sim).unwrap().len(), 169);
    assert!(plant.registry.history_checked("s001", 169, &mut sim).is_err());
}

#[test]
fn plant_serializes_for_the_dashboard() {
    let mut sim = simulator(8);
    let plant = Plant::seeded(&mut sim).unwrap();

    let json = serde_json::to_value(plant.registry.list().unwrap()).unwrap();
    let first = &json.as_array().unwrap()[0];
    assert_eq!(first["id"], "s001");
    assert_eq!(first["type"], "ph");
    assert_eq!(first["currentReading"]["id"], "r001");
}

#[test]
fn seeded_alert_ids_cannot_be_reused() {
    let mut sim = simulator(9);
    let mut plant = Plant::seeded(&mut sim).unwrap();

    let mut copy = plant.board.alert("a001").unwrap().clone();
    copy.title = "second".into();
    assert_eq!(
        plant.board.push_alert(copy).unwrap_err(),
        CatalogError::DuplicateAlert { id: "a001".into() }
    );

    plant.board.acknowledge("a001").unwrap();
    assert!(plant.board.for_sensor("s001").all(|a| a.acknowledged));
    assert_eq!(plant.board.active().count(), 3);
}
