//! Spherical measurements valid anywhere on the globe.
//!
//! These are reference functions for data outside the village's latitude
//! band. Persisted `luas` values always come from [`super::compute_area`];
//! switching them to these would change every stored figure.

use geo::{ChamberlainDuquetteArea, Distance, Haversine, LineString, Point, Polygon};

use super::area::MIN_RING_POINTS;
use crate::domain::GeoPoint;

fn to_point(p: GeoPoint) -> Point<f64> {
    Point::new(p.lng, p.lat)
}

/// Great-circle distance in meters
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    Haversine::distance(to_point(a), to_point(b))
}

/// Sum of great-circle segment lengths in meters
pub fn haversine_path_length(path: &[GeoPoint]) -> f64 {
    path.windows(2)
        .map(|pair| haversine_distance(pair[0], pair[1]))
        .sum()
}

/// Area on the sphere in square meters
pub fn spherical_area(ring: &[GeoPoint]) -> f64 {
    if ring.len() < MIN_RING_POINTS {
        return 0.0;
    }
    let exterior: LineString<f64> = ring.iter().map(|p| (p.lng, p.lat)).collect();
    Polygon::new(exterior, vec![]).chamberlain_duquette_unsigned_area()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{compute_area, compute_path_length};

    #[test]
    fn test_haversine_short_paths() {
        assert_eq!(haversine_path_length(&[]), 0.0);
        assert_eq!(haversine_path_length(&[GeoPoint::new(1.0, 1.0)]), 0.0);
    }

    #[test]
    fn test_haversine_close_to_flat_near_village() {
        let path = [GeoPoint::new(-6.6181, 110.6539), GeoPoint::new(-6.6171, 110.6539)];
        let flat = compute_path_length(&path);
        let sphere = haversine_path_length(&path);
        assert!((flat - sphere).abs() / sphere < 0.01);
    }

    #[test]
    fn test_spherical_area_close_to_flat_near_village() {
        let ring = [
            GeoPoint::new(-6.6185, 110.6540),
            GeoPoint::new(-6.6185, 110.6550),
            GeoPoint::new(-6.6175, 110.6550),
            GeoPoint::new(-6.6175, 110.6540),
        ];
        let flat = compute_area(&ring);
        let sphere = spherical_area(&ring);
        assert!((flat - sphere).abs() / sphere < 0.02);
    }

    #[test]
    fn test_spherical_area_degenerate() {
        assert_eq!(spherical_area(&[GeoPoint::new(0.0, 0.0)]), 0.0);
    }
}
