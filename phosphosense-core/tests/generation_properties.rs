//! Property tests for reading and history generation
//!
//! Every property runs against a fixed clock and a seeded random source, so
//! failures shrink to a reproducible seed.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use phosphosense_core::{
    classify, generate_historical_data, generate_reading, profile,
    utils::percent_change, Clock, FixedClock, ReadingStatus, SensorType,
};

fn sensor_type() -> impl Strategy<Value = SensorType> {
    prop::sample::select(SensorType::ALL.to_vec())
}

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
}

proptest! {
    #[test]
    fn reading_is_in_range_with_table_unit_and_mean(ty in sensor_type(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let reading = generate_reading("x", ty, &clock(), &mut rng);
        let p = profile(ty);

        prop_assert!(reading.value >= p.min && reading.value <= p.max);
        prop_assert_eq!(reading.unit.as_str(), p.unit);
        prop_assert_eq!(reading.mean, p.mean);
    }

    #[test]
    fn change_is_relative_to_the_baseline(ty in sensor_type(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let reading = generate_reading("x", ty, &clock(), &mut rng);
        prop_assert_eq!(reading.change, percent_change(reading.value, profile(ty).mean));
    }

    #[test]
    fn classification_is_a_pure_function_of_value(ty in sensor_type(), value in -100.0f64..5000.0) {
        let first = classify(ty, value);
        for _ in 0..3 {
            prop_assert_eq!(classify(ty, value), first);
        }
    }

    #[test]
    fn critical_conditions_always_classify_critical(
        ty in sensor_type(),
        value in -100.0f64..5000.0
    ) {
        let rule = profile(ty).thresholds;
        if rule.is_critical(value) {
            prop_assert_eq!(classify(ty, value), ReadingStatus::Critical);
        } else if rule.is_warning(value) {
            prop_assert_eq!(classify(ty, value), ReadingStatus::Warning);
        } else {
            prop_assert_eq!(classify(ty, value), ReadingStatus::Normal);
        }
    }

    #[test]
    fn history_shape(ty in sensor_type(), hours in 0u32..200, seed in any::<u64>()) {
        let clock = clock();
        let mut rng = StdRng::seed_from_u64(seed);
        let data = generate_historical_data("s", ty, hours, &clock, &mut rng).unwrap();

        prop_assert_eq!(data.len(), hours as usize + 1);
        prop_assert_eq!(data[0].timestamp, clock.now() - Duration::hours(i64::from(hours)));
        prop_assert_eq!(data[data.len() - 1].timestamp, clock.now());

        for pair in data.windows(2) {
            prop_assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::hours(1));
        }
    }

    #[test]
    fn history_respects_walk_bound(ty in sensor_type(), hours in 1u32..200, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let data = generate_historical_data("s", ty, hours, &clock(), &mut rng).unwrap();

        for pair in data.windows(2) {
            let step = (pair[1].value - pair[0].value).abs();
            prop_assert!(step <= 0.05 * pair[0].value + 1e-9);
        }
        for r in &data {
            prop_assert_eq!(r.status, classify(ty, r.value));
            prop_assert_eq!(r.change, percent_change(r.value, profile(ty).mean));
        }
    }
}
