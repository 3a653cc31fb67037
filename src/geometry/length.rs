use super::area::{METERS_PER_DEGREE_LAT, METERS_PER_DEGREE_LNG};
use crate::domain::GeoPoint;

/// Locally-flat distance between two points in meters.
///
/// Uses the same fixed degree-to-meter factors as [`super::compute_area`],
/// so it carries the same accuracy limits away from the reference latitude.
pub fn distance_between(a: GeoPoint, b: GeoPoint) -> f64 {
    let dy = (b.lat - a.lat) * METERS_PER_DEGREE_LAT;
    let dx = (b.lng - a.lng) * METERS_PER_DEGREE_LNG;
    dx.hypot(dy)
}

/// Total length of the polyline in meters. Paths with fewer than two points
/// have length 0.
pub fn compute_path_length(path: &[GeoPoint]) -> f64 {
    path.windows(2)
        .map(|pair| distance_between(pair[0], pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_paths_have_zero_length() {
        assert_eq!(compute_path_length(&[]), 0.0);
        assert_eq!(compute_path_length(&[GeoPoint::new(-6.6, 110.6)]), 0.0);
    }

    #[test]
    fn test_one_thousandth_degree_latitude() {
        let path = [GeoPoint::new(0.0, 0.0), GeoPoint::new(0.001, 0.0)];
        let length = compute_path_length(&path);
        assert!((length - 111.32).abs() / 111.32 < 0.01);
    }

    #[test]
    fn test_longitude_is_shorter_than_latitude() {
        let origin = GeoPoint::new(-6.6181, 110.6539);
        let north = GeoPoint::new(-6.6171, 110.6539);
        let east = GeoPoint::new(-6.6181, 110.6549);
        let d_lat = distance_between(origin, north);
        let d_lng = distance_between(origin, east);
        assert!(d_lng < d_lat);
        assert!((d_lng / d_lat - 0.991).abs() < 1e-6);
    }

    #[test]
    fn test_segments_accumulate() {
        let path = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.001, 0.0),
            GeoPoint::new(0.002, 0.0),
            GeoPoint::new(0.002, 0.001),
        ];
        let expected = 2.0 * 111.32 + 111.32 * 0.991;
        assert!((compute_path_length(&path) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_repeated_point_adds_nothing() {
        let p = GeoPoint::new(-6.6181, 110.6539);
        assert_eq!(compute_path_length(&[p, p, p]), 0.0);
    }
}
