//! Sensor History Example
//!
//! Generates a current reading and a 24 hour history for every sensor type,
//! then prints a summary per type.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_sensor_history
//! ```

use phosphosense_core::{HistoryStats, SensorType, Simulator};

fn main() {
    println!("PhosphoSense Sensor History Example");
    println!("===================================\n");

    // Fixed seed so repeated runs print the same numbers
    let mut simulator = Simulator::seeded(42);

    for sensor_type in SensorType::ALL {
        let current = simulator.reading("current", sensor_type);
        println!(
            "{:<14} now: {:>8} {:<6} {:<8} ({:+.2}% vs baseline {})",
            sensor_type.name(),
            current.value,
            current.unit,
            current.status.name(),
            current.change,
            current.mean,
        );

        let history = match simulator.default_history(sensor_type.name(), sensor_type) {
            Ok(history) => history,
            Err(e) => {
                eprintln!("{:<14} history failed: {}", sensor_type.name(), e);
                continue;
            }
        };
        if let Some(stats) = HistoryStats::from_readings(&history) {
            println!(
                "{:<14} 24h: min {:.2}  max {:.2}  normal/warning/critical {}/{}/{}  worst {}",
                "",
                stats.min,
                stats.max,
                stats.normal,
                stats.warning,
                stats.critical,
                stats.worst_status(),
            );
        }
    }
}
