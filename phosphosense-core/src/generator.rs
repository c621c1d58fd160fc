//! Single-reading generator
//!
//! Samples one value uniformly from the type's documented range and builds a
//! classified [`Reading`] stamped with the clock's current time. No state is
//! kept between calls; the clock and random source are borrowed per call.

use rand::Rng;

use crate::{
    profiles::profile,
    time::Clock,
    types::{Reading, SensorType},
};

/// Generate one synthetic reading for a sensor type
pub fn generate_reading<C, R>(
    id: &str,
    sensor_type: SensorType,
    clock: &C,
    rng: &mut R,
) -> Reading
where
    C: Clock + ?Sized,
    R: Rng,
{
    let profile = profile(sensor_type);
    let value = rng.gen_range(profile.min..=profile.max);
    let reading = Reading::classified(id, clock.now(), sensor_type, value);

    log_trace!(
        "{} reading {}: {} {} ({})",
        sensor_type,
        reading.id,
        reading.value,
        reading.unit,
        reading.status
    );

    reading
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify::classify, time::FixedClock, utils::percent_change};
    use chrono::{TimeZone, Utc};
    use rand::{rngs::StdRng, SeedableRng};

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn reading_carries_id_and_clock_time() {
        let clock = clock();
        let mut rng = StdRng::seed_from_u64(1);

        let reading = generate_reading("r001", SensorType::Ph, &clock, &mut rng);
        assert_eq!(reading.id, "r001");
        assert_eq!(reading.timestamp, clock.now());
        assert_eq!(reading.unit, "pH");
        assert_eq!(reading.mean, 7.0);
    }

    #[test]
    fn values_stay_in_range_for_every_type() {
        let clock = clock();
        let mut rng = StdRng::seed_from_u64(2);

        for ty in SensorType::ALL {
            let p = profile(ty);
            for _ in 0..500 {
                let r = generate_reading("x", ty, &clock, &mut rng);
                assert!(p.in_range(r.value), "{ty}: {}", r.value);
                assert_eq!(r.status, classify(ty, r.value));
                assert_eq!(r.change, percent_change(r.value, p.mean));
            }
        }
    }

    #[test]
    fn same_seed_same_reading() {
        let clock = clock();
        let a = generate_reading("r", SensorType::Rpm, &clock, &mut StdRng::seed_from_u64(9));
        let b = generate_reading("r", SensorType::Rpm, &clock, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn radiation_ten_thousand_samples() {
        let clock = clock();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..10_000 {
            let r = generate_reading("x", SensorType::Radiation, &clock, &mut rng);
            assert!((0.0..=150.0).contains(&r.value));
            if r.value > 120.0 {
                assert_eq!(r.status, crate::ReadingStatus::Critical);
            } else if r.value > 80.0 {
                assert_eq!(r.status, crate::ReadingStatus::Warning);
            } else {
                assert_eq!(r.status, crate::ReadingStatus::Normal);
            }
        }
    }
}
