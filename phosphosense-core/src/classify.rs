//! Threshold classification shared by every generation path
//!
//! Status is a pure function of `(type, value)`. The single-reading generator
//! and the history walk both come through here, so a value classifies the
//! same way no matter how it was produced.
//!
//! Evaluation order matters at the boundaries: the warning rule is applied
//! first and the critical rule then overrides it. With strict comparisons
//! this gives, for pH:
//!
//! ```text
//! 5.4  critical     6.0  normal      8.0  normal
//! 5.5  warning      7.0  normal      8.5  warning
//! 5.9  warning                       8.6  critical
//! ```

use crate::{
    profiles::profile,
    types::{ReadingStatus, SensorType},
};

/// Classify a value against its sensor type's thresholds
pub fn classify(sensor_type: SensorType, value: f64) -> ReadingStatus {
    profile(sensor_type).thresholds.classify(value)
}
