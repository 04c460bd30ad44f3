//! Instantaneous vertical velocity from a depth/time trace

use chrono::{DateTime, Utc};
use glider_core::{epoch_nanos, Error, Result};

/// Vertical velocity in cm/s for each sample of a depth trace.
///
/// Timestamps are reduced to seconds elapsed since the earliest sample and
/// depth (m, or dbar as a proxy) is scaled to centimeters; each sample's
/// velocity is the first difference of depth over the first difference of
/// time. The first element has no prior sample and is NaN. Positive velocity
/// is descending.
///
/// A repeated timestamp gives a zero time-delta; the velocity there is NaN,
/// which downstream classification resolves to the Unknown phase.
pub fn vertical_velocity(time: &[DateTime<Utc>], depth: &[f64]) -> Result<Vec<f64>> {
    if time.len() != depth.len() {
        return Err(Error::shape_mismatch(
            "vertical_velocity",
            time.len(),
            depth.len(),
        ));
    }

    let secs = elapsed_seconds(time)?;
    let mut velocity = vec![f64::NAN; depth.len()];
    for i in 1..depth.len() {
        let dt = secs[i] - secs[i - 1];
        if dt != 0.0 {
            velocity[i] = (depth[i] - depth[i - 1]) * 100.0 / dt;
        }
    }
    Ok(velocity)
}

/// Seconds elapsed since the earliest timestamp in the slice.
fn elapsed_seconds(time: &[DateTime<Utc>]) -> Result<Vec<f64>> {
    let nanos = time
        .iter()
        .map(epoch_nanos)
        .collect::<Result<Vec<i64>>>()?;
    let origin = nanos.iter().copied().min().unwrap_or(0);
    Ok(nanos.iter().map(|&n| (n - origin) as f64 / 1e9).collect())
}
