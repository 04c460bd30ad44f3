//! Representative timestamps per dive

use chrono::{DateTime, Utc};

use glider_core::{epoch_nanos, Error, Result};

use crate::groups::ProfileGroups;

/// One representative timestamp per row: the midpoint of the row's dive.
///
/// The value is the midpoint of the dive's time span, `min + (max − min)/2`,
/// not the mean of its samples, so uneven sampling density inside a dive
/// does not drag it. Truncated to whole seconds. Rows outside any group get
/// `None`.
///
/// The result makes a pseudo-discrete per-dive time axis for plotting
/// profile data against time.
pub fn dive_midpoint_time(
    groups: &ProfileGroups,
    time: &[DateTime<Utc>],
) -> Result<Vec<Option<DateTime<Utc>>>> {
    if time.len() != groups.n_rows() {
        return Err(Error::shape_mismatch(
            "dive_midpoint_time",
            groups.n_rows(),
            time.len(),
        ));
    }

    let mut out = vec![None; time.len()];
    for (_dive, rows) in groups.iter() {
        let mut min_ns = i64::MAX;
        let mut max_ns = i64::MIN;
        for &row in rows {
            let ns = epoch_nanos(&time[row])?;
            min_ns = min_ns.min(ns);
            max_ns = max_ns.max(ns);
        }
        let mid_s = (min_ns + (max_ns - min_ns) / 2).div_euclid(1_000_000_000);
        let mid = DateTime::from_timestamp(mid_s, 0).ok_or_else(|| {
            Error::Computation(format!("dive midpoint {mid_s}s is not a representable time"))
        })?;
        for &row in rows {
            out[row] = Some(mid);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_midpoint_of_time_span() {
        // Sampling is dense early in the dive; the midpoint of the span
        // ignores that, while a sample mean would not
        let dives = [0.5, 0.5, 0.5, 0.5];
        let time = [t(0), t(10), t(20), t(200)];
        let groups = ProfileGroups::from_dive_numbers(&dives);

        let rep = dive_midpoint_time(&groups, &time).unwrap();

        assert_eq!(rep, vec![Some(t(100)); 4]);
    }

    #[test]
    fn test_broadcast_per_dive() {
        let dives = [0.5, 0.5, 1.0, 1.0];
        let time = [t(0), t(100), t(200), t(400)];
        let groups = ProfileGroups::from_dive_numbers(&dives);

        let rep = dive_midpoint_time(&groups, &time).unwrap();

        assert_eq!(rep[0], Some(t(50)));
        assert_eq!(rep[1], Some(t(50)));
        assert_eq!(rep[2], Some(t(300)));
        assert_eq!(rep[3], Some(t(300)));
    }

    #[test]
    fn test_second_truncation() {
        let dives = [0.5, 0.5];
        let time = [
            DateTime::from_timestamp(10, 0).unwrap(),
            DateTime::from_timestamp(13, 500_000_000).unwrap(),
        ];
        let groups = ProfileGroups::from_dive_numbers(&dives);

        let rep = dive_midpoint_time(&groups, &time).unwrap();

        // Midpoint 11.75 s truncates to 11 s
        assert_eq!(rep[0], Some(t(11)));
    }

    #[test]
    fn test_ungrouped_rows_have_no_time() {
        let dives = [0.5, f64::NAN];
        let time = [t(0), t(100)];
        let groups = ProfileGroups::from_dive_numbers(&dives);

        let rep = dive_midpoint_time(&groups, &time).unwrap();

        assert_eq!(rep[0], Some(t(0)));
        assert_eq!(rep[1], None);
    }

    #[test]
    fn test_shape_mismatch() {
        let groups = ProfileGroups::from_dive_numbers(&[0.5, 1.0]);

        let result = dive_midpoint_time(&groups, &[t(0)]);

        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }
}
