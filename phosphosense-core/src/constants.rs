//! Simulation constants
//!
//! Shared by the generators and the default configuration.

// ===== TIME =====

/// Seconds in one hour, the spacing of history points
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Hours in one day
pub const HOURS_PER_DAY: u32 = 24;

// ===== HISTORY =====

/// Look-back window used when the caller gives none (hours)
pub const DEFAULT_HISTORY_HOURS: u32 = 24;

/// Longest window accepted from external input by default: 90 days (hours)
///
/// Matches the longest data-retention setting offered by the dashboard.
pub const MAX_HISTORY_HOURS: u32 = 90 * HOURS_PER_DAY;

/// Largest step of the random walk, as a fraction of the previous value
pub const WALK_STEP_FRACTION: f64 = 0.05;

// ===== PRECISION =====

/// Decimal places carried by values and percent changes
pub const VALUE_DECIMALS: i32 = 2;
