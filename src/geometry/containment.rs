use super::area::MIN_RING_POINTS;
use crate::domain::GeoPoint;

/// Ray-casting point-in-polygon test.
///
/// A ray is cast from `point` and each ring edge `(i, i-1)` whose longitude
/// span straddles the point is checked; crossings below the point's latitude
/// toggle the result. Rings with fewer than three points contain nothing.
///
/// Points exactly on an edge may land on either side.
pub fn is_point_in_polygon(point: GeoPoint, ring: &[GeoPoint]) -> bool {
    let n = ring.len();
    if n < MIN_RING_POINTS {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = ring[i];
        let b = ring[j];

        let straddles = (a.lng < point.lng && b.lng >= point.lng)
            || (b.lng < point.lng && a.lng >= point.lng);

        // straddles implies a.lng != b.lng, so the division is safe
        if straddles {
            let lat_at = a.lat + (point.lng - a.lng) / (b.lng - a.lng) * (b.lat - a.lat);
            if lat_at < point.lat {
                inside = !inside;
            }
        }

        j = i;
    }

    inside
}
