//! Scenario tests against the public simulator API

use chrono::{Duration, TimeZone, Utc};
use rand::{rngs::StdRng, SeedableRng};

use phosphosense_core::{
    Clock, FixedClock, HistoryStats, ReadingStatus, SensorType, SimulationConfig, SimulationError,
    Simulator,
};

fn simulator(seed: u64) -> Simulator<FixedClock, StdRng> {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    Simulator::with_parts(
        FixedClock::new(now),
        StdRng::seed_from_u64(seed),
        SimulationConfig::seeded(seed),
    )
}

#[test]
fn radiation_ten_thousand_readings() {
    let mut sim = simulator(100);

    for _ in 0..10_000 {
        let r = sim.reading("x", SensorType::Radiation);
        assert!((0.0..=150.0).contains(&r.value), "{}", r.value);

        if r.value > 120.0 {
            assert_eq!(r.status, ReadingStatus::Critical);
        } else if r.value > 80.0 {
            assert_eq!(r.status, ReadingStatus::Warning);
        }
    }
}

#[test]
fn ph_history_with_zero_hours() {
    let mut sim = simulator(101);
    let data = sim.history("s1", SensorType::Ph, 0).unwrap();
    assert_eq!(data.len(), 1);
}

#[test]
fn pressure_day_history() {
    let mut sim = simulator(102);
    let now = sim.clock().now();
    let data = sim.history("s1", SensorType::Pressure, 24).unwrap();

    assert_eq!(data.len(), 25);
    assert_eq!(data[24].timestamp, now);
    assert_eq!(data[0].timestamp, now - Duration::hours(24));

    for pair in data.windows(2) {
        let step = (pair[1].value - pair[0].value).abs();
        assert!(step <= 0.05 * pair[0].value + 1e-9);
    }
}

#[test]
fn system_clock_history_ends_near_now() {
    let mut sim = Simulator::seeded(103);
    let before = Utc::now();
    let data = sim.history("s1", SensorType::Temperature, 24).unwrap();
    let after = Utc::now();

    let last = data.last().unwrap().timestamp;
    assert!(last >= before && last <= after);
    assert_eq!(data[0].timestamp, last - Duration::hours(24));
}

#[test]
fn named_input_is_validated() {
    let mut sim = simulator(104);

    assert!(matches!(
        sim.history_named("s1", "Radiation", 24),
        Err(SimulationError::InvalidSensorType { .. })
    ));
    assert!(matches!(
        sim.history_named("s1", "radiation", -24),
        Err(SimulationError::InvalidWindow { hours: -24, .. })
    ));

    let data = sim.history_named("s1", "radiation", 12).unwrap();
    assert_eq!(data.len(), 13);
}

#[test]
fn long_history_statistics() {
    let mut sim = simulator(105);
    let data = sim.history("s7", SensorType::Phosphogypsum, 24 * 30).unwrap();
    let stats = HistoryStats::from_readings(&data).unwrap();

    assert_eq!(stats.normal + stats.warning + stats.critical, data.len());
    assert_eq!(stats.latest_status, data.last().unwrap().status);
    assert!(stats.min <= stats.max);
}

#[test]
fn readings_serialize_for_chart_consumers() {
    let mut sim = simulator(106);
    let data = sim.history("s2", SensorType::Radiation, 2).unwrap();
    let json = serde_json::to_value(&data).unwrap();

    let points = json.as_array().unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0]["id"], "s2-hist-2");
    assert_eq!(points[2]["id"], "s2-hist-0");
    assert_eq!(points[2]["unit"], "μSv/h");
    assert!(points.iter().all(|p| p["timestamp"].is_string()));
}
