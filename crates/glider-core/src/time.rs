//! Small time conversions shared by the telemetry crates

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

/// Epoch nanoseconds of a timestamp.
///
/// Errors for instants outside the nanosecond-representable range
/// (roughly years 1677 to 2262).
pub fn epoch_nanos(t: &DateTime<Utc>) -> Result<i64> {
    t.timestamp_nanos_opt().ok_or_else(|| {
        Error::InvalidInput(format!(
            "timestamp {t} is outside the nanosecond-representable range"
        ))
    })
}
