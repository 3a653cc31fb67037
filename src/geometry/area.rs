use crate::domain::GeoPoint;

/// Meters spanned by one degree of latitude
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// Fixed longitude shrink factor for the operating region.
///
/// This stands in for `cos(latitude)` at the reference latitude band and is
/// only accurate for a small area near it. Previously persisted `luas` values
/// were computed with this exact factor, so it must not be replaced by a
/// per-point correction; see [`super::geodesic`] for general-purpose math.
pub const LNG_CORRECTION: f64 = 0.991;

/// Meters spanned by one degree of longitude in the operating region
pub const METERS_PER_DEGREE_LNG: f64 = METERS_PER_DEGREE_LAT * LNG_CORRECTION;

/// Minimum vertex count for a ring to enclose an area
pub const MIN_RING_POINTS: usize = 3;

/// Planar Shoelace area of the ring in square degrees.
///
/// The ring is treated as closed between its last and first vertex, so a
/// repeated closing point contributes a zero-length edge and changes nothing.
pub fn planar_area_degrees(ring: &[GeoPoint]) -> f64 {
    let n = ring.len();
    if n < MIN_RING_POINTS {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        sum += a.lat * b.lng - b.lat * a.lng;
    }

    sum.abs() / 2.0
}

/// Area enclosed by the ring in square meters.
///
/// Rings with fewer than three points have area 0.
pub fn compute_area(ring: &[GeoPoint]) -> f64 {
    planar_area_degrees(ring) * METERS_PER_DEGREE_LAT * METERS_PER_DEGREE_LNG
}
