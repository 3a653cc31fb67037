use serde_json::Value;

use crate::domain::{Road, RoadClass};
use crate::geometry::{compute_path_length, format_length};
use crate::storage::coords::{CoordinateError, decode_road_geometry};

/// Length of a road and its display form
#[derive(Debug, Clone, PartialEq)]
pub struct RoadLength {
    pub meters: f64,
    pub display: String,
}

impl RoadLength {
    pub fn of(road: &Road) -> Self {
        let meters = compute_path_length(&road.points);
        Self {
            meters,
            display: format_length(meters),
        }
    }
}

/// Build a road from its stored row fields. `geometry` may be a GeoJSON
/// LineString, a bare `[lat, lng]` array, or either one as a JSON string.
pub fn road_from_storage(
    name: &str,
    class_tag: &str,
    geometry: &Value,
) -> Result<Road, CoordinateError> {
    let points = decode_road_geometry(geometry)?.into_path();
    Ok(Road::new(name, RoadClass::from_tag(class_tag), points))
}

/// Description text used when a road is saved without one
pub fn length_description(length: &RoadLength) -> String {
    format!("Panjang jalan: {}", length.display)
}

/// Fill an empty description with the road length. Returns the length.
pub fn fill_description(road: &mut Road) -> RoadLength {
    let length = RoadLength::of(road);
    let blank = road
        .description
        .as_deref()
        .is_none_or(|d| d.trim().is_empty());
    if blank {
        road.description = Some(length_description(&length));
    }
    length
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPoint;
    use serde_json::json;

    #[test]
    fn test_road_from_line_string() {
        let geometry = json!({
            "type": "LineString",
            "coordinates": [[110.6539, -6.6181], [110.6539, -6.6171]]
        });
        let road = road_from_storage("Jalan Raya Tegalsambi", "jalan_desa", &geometry).unwrap();
        assert_eq!(road.class, RoadClass::Village);
        assert_eq!(road.points[0], GeoPoint::new(-6.6181, 110.6539));

        let length = RoadLength::of(&road);
        assert!((length.meters - 111.32).abs() < 0.01);
        assert_eq!(length.display, "111 m");
    }

    #[test]
    fn test_road_from_raw_points_matches_line_string() {
        let raw = json!([[-6.6181, 110.6539], [-6.6171, 110.6549]]);
        let line = json!({
            "type": "LineString",
            "coordinates": [[110.6539, -6.6181], [110.6549, -6.6171]]
        });
        let a = road_from_storage("A", "jalan_setapak", &raw).unwrap();
        let b = road_from_storage("B", "jalan_setapak", &line).unwrap();
        assert_eq!(a.points, b.points);
        assert_eq!(RoadLength::of(&a), RoadLength::of(&b));
    }

    #[test]
    fn test_fill_description_only_when_blank() {
        let points = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.01, 0.01)];
        let mut road = Road::new("Gang Mawar", RoadClass::Neighbourhood, points.clone());
        let length = fill_description(&mut road);
        assert_eq!(
            road.description.as_deref(),
            Some(format!("Panjang jalan: {}", length.display).as_str())
        );
        assert!(length.display.ends_with(" km"));

        let mut described = Road::new("Gang Melati", RoadClass::Neighbourhood, points);
        described.description = Some("Jalan cor beton".to_string());
        fill_description(&mut described);
        assert_eq!(described.description.as_deref(), Some("Jalan cor beton"));
    }

    #[test]
    fn test_bad_geometry_is_error() {
        assert!(road_from_storage("X", "jalan_desa", &json!("not json")).is_err());
        assert!(road_from_storage("X", "jalan_desa", &json!(42)).is_err());
    }
}
