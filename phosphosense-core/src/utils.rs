//! Numeric helpers shared by the generators

use crate::constants::VALUE_DECIMALS;

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round to 2 decimal places, the precision every reading carries
pub fn round2(value: f64) -> f64 {
    round_to(value, VALUE_DECIMALS)
}

/// Truncate toward zero at 2 decimal places
pub fn trunc2(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0
}

/// Percent deviation of `value` from `mean`, rounded to 2 decimals
///
/// Returns 0 for a zero mean rather than dividing by it.
pub fn percent_change(value: f64, mean: f64) -> f64 {
    if mean == 0.0 {
        return 0.0;
    }
    round2((value - mean) / mean * 100.0)
}
