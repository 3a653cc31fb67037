use std::fmt;

/// A geographic position in WGS84 degrees.
///
/// Fields are named on purpose: stored polygons use `[lat, lng]` pairs while
/// GeoJSON road geometry uses `[lng, lat]`, so positional tuples never cross
/// into the geometry functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.lat >= 0.0 { "N" } else { "S" };
        let lng_dir = if self.lng >= 0.0 { "E" } else { "W" };
        write!(
            f,
            "{:.6}{} / {:.6}{}",
            self.lat.abs(),
            lat_dir,
            self.lng.abs(),
            lng_dir
        )
    }
}

/// Closed polygon boundary. The closing edge from the last vertex back to the
/// first is implied, so a repeated first point at the end is optional.
pub type Ring = Vec<GeoPoint>;

/// Open polyline, e.g. a road centre line.
pub type Path = Vec<GeoPoint>;
