//! Great-circle distances along a glider surface track
//!
//! Haversine distances between consecutive GPS fixes of a lon/lat track, or
//! from every fix to one reference fix. Both modes return one value per
//! input point, with the first element pinned to zero so the output reads as
//! "distance traveled since the start" and stays aligned with the track.

use glider_core::{Error, Result};

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Distance in meters between consecutive track points.
///
/// The first element is 0 so the output aligns with the input.
pub fn adjacent_distance(lon: &[f64], lat: &[f64]) -> Result<Vec<f64>> {
    check_track(lon, lat)?;
    if lon.is_empty() {
        return Ok(Vec::new());
    }
    let mut d = Vec::with_capacity(lon.len());
    d.push(0.0);
    for i in 1..lon.len() {
        d.push(haversine(lon[i - 1], lat[i - 1], lon[i], lat[i]));
    }
    Ok(d)
}

/// Distance in meters from every track point to the point at `ref_idx`.
///
/// `ref_idx` may be negative to count from the end of the track. The first
/// element is pinned to 0 whatever the reference is, keeping the output
/// aligned with the input; the value at the reference itself is 0 as well.
pub fn reference_distance(lon: &[f64], lat: &[f64], ref_idx: isize) -> Result<Vec<f64>> {
    check_track(lon, lat)?;
    let n = lon.len() as isize;
    let resolved = if ref_idx < 0 { ref_idx + n } else { ref_idx };
    if resolved < 0 || resolved >= n {
        return Err(Error::InvalidParameter(format!(
            "reference index {ref_idx} out of range for a track of {n} points"
        )));
    }
    let r = resolved as usize;
    let mut d: Vec<f64> = (0..lon.len())
        .map(|i| haversine(lon[r], lat[r], lon[i], lat[i]))
        .collect();
    d[0] = 0.0;
    Ok(d)
}

fn check_track(lon: &[f64], lat: &[f64]) -> Result<()> {
    if lon.len() != lat.len() {
        return Err(Error::shape_mismatch("lon/lat track", lon.len(), lat.len()));
    }
    Ok(())
}

/// Haversine great-circle distance between two fixes given in degrees.
fn haversine(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (lon1, lat1) = (lon1.to_radians(), lat1.to_radians());
    let (lon2, lat2) = (lon2.to_radians(), lat2.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + (dlon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let angle = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // One degree of longitude on the equator
    const DEGREE_M: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

    #[test]
    fn test_adjacent_distances_on_equator() {
        let lon = [0.0, 1.0, 2.0, 2.0];
        let lat = [0.0, 0.0, 0.0, 0.0];

        let d = adjacent_distance(&lon, &lat).unwrap();

        assert_eq!(d.len(), 4);
        assert_relative_eq!(d[0], 0.0);
        assert_relative_eq!(d[1], DEGREE_M, max_relative = 1e-9);
        assert_relative_eq!(d[2], DEGREE_M, max_relative = 1e-9);
        assert_relative_eq!(d[3], 0.0);
    }

    #[test]
    fn test_meridian_distance() {
        // One degree of latitude is the same arc anywhere on a sphere
        let lon = [20.0, 20.0];
        let lat = [60.0, 61.0];

        let d = adjacent_distance(&lon, &lat).unwrap();

        assert_relative_eq!(d[1], DEGREE_M, max_relative = 1e-9);
    }

    #[test]
    fn test_reference_distances() {
        let lon = [0.0, 1.0, 2.0];
        let lat = [0.0, 0.0, 0.0];

        let d = reference_distance(&lon, &lat, 1).unwrap();

        assert_eq!(d.len(), 3);
        // Element 0 is pinned to zero even though point 0 is a degree away
        // from the reference
        assert_relative_eq!(d[0], 0.0);
        assert_relative_eq!(d[1], 0.0);
        assert_relative_eq!(d[2], DEGREE_M, max_relative = 1e-9);
    }

    #[test]
    fn test_negative_reference_index() {
        let lon = [0.0, 1.0, 2.0];
        let lat = [0.0, 0.0, 0.0];

        let from_end = reference_distance(&lon, &lat, -1).unwrap();
        let explicit = reference_distance(&lon, &lat, 2).unwrap();

        assert_eq!(from_end, explicit);
    }

    #[test]
    fn test_reference_index_out_of_range() {
        let lon = [0.0, 1.0];
        let lat = [0.0, 0.0];

        assert!(reference_distance(&lon, &lat, 2).is_err());
        assert!(reference_distance(&lon, &lat, -3).is_err());
    }

    #[test]
    fn test_single_point_track() {
        assert_eq!(adjacent_distance(&[8.5], &[63.7]).unwrap(), vec![0.0]);
        assert_eq!(
            reference_distance(&[8.5], &[63.7], 0).unwrap(),
            vec![0.0]
        );
    }

    #[test]
    fn test_empty_track() {
        assert!(adjacent_distance(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_length_mismatch_is_fatal() {
        let lon = [0.0, 1.0, 2.0];
        let lat = [0.0, 0.0, 0.0, 0.0];

        assert!(matches!(
            adjacent_distance(&lon, &lat),
            Err(Error::ShapeMismatch { .. })
        ));
        assert!(matches!(
            reference_distance(&lon, &lat, 0),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_antipodal_points() {
        let d = adjacent_distance(&[0.0, 180.0], &[0.0, 0.0]).unwrap();

        assert_relative_eq!(d[1], EARTH_RADIUS_M * std::f64::consts::PI, max_relative = 1e-9);
    }
}
