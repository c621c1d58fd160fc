//! Plant catalog for PhosphoSense
//!
//! Everything the dashboard shows around the simulated readings: which
//! sensors exist and where, the alerts raised against them, the treatment
//! recommendations that answer those alerts, headline counts, chart scaling
//! and operator settings.
//!
//! Readings themselves come from `phosphosense-core`; the catalog only
//! stores the current one per sensor and swaps it on refresh.
//!
//! ```no_run
//! use phosphosense_catalog::{DashboardOverview, Plant};
//! use phosphosense_core::Simulator;
//!
//! let mut simulator = Simulator::new();
//! let plant = Plant::seeded(&mut simulator)?;
//!
//! plant.registry.refresh_all(&mut simulator)?;
//! let overview = DashboardOverview::compute(&plant.registry, &plant.board)?;
//! println!("{} / {} sensors online", overview.online_sensors, overview.total_sensors);
//! # Ok::<(), phosphosense_catalog::CatalogError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod alerts;
pub mod errors;
pub mod model;
pub mod overview;
pub mod registry;
pub mod seed;
pub mod settings;

// Public API
pub use alerts::AlertBoard;
pub use errors::{CatalogError, CatalogResult};
pub use model::{Alert, AlertSeverity, Priority, Sensor, SensorStatus, TreatmentRecommendation};
pub use overview::{ChartScale, DashboardOverview, StatusCounts};
pub use registry::SensorRegistry;
pub use seed::Plant;
pub use settings::AppSettings;
