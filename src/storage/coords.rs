//! At-rest coordinate forms.
//!
//! Stored parcel rings are arrays of `[lat, lng]` pairs. Road geometry is
//! either a GeoJSON `LineString` (positions are `[lng, lat]`) or, for older
//! rows, a bare array of `[lat, lng]` pairs. Both are normalised to
//! [`GeoPoint`]s here so nothing past this module sees a positional pair.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::{GeoPoint, Path, Ring};

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoordinateError {
    #[error("invalid coordinate JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("position {index} has {len} values, expected {expected}")]
    BadPosition {
        index: usize,
        len: usize,
        expected: &'static str,
    },

    #[error("position {index} is not a finite number")]
    NonFinite { index: usize },
}

/// Road geometry as found in storage, tagged by its at-rest shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RoadGeometry {
    LineString(Path),
    RawPoints(Path),
}

impl RoadGeometry {
    pub fn path(&self) -> &[GeoPoint] {
        match self {
            RoadGeometry::LineString(p) | RoadGeometry::RawPoints(p) => p,
        }
    }

    pub fn into_path(self) -> Path {
        match self {
            RoadGeometry::LineString(p) | RoadGeometry::RawPoints(p) => p,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
enum GeoJsonGeometry {
    LineString { coordinates: Vec<Vec<f64>> },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RoadGeometryWire {
    GeoJson(GeoJsonGeometry),
    Raw(Vec<Vec<f64>>),
}

fn check_finite(index: usize, p: GeoPoint) -> Result<GeoPoint, CoordinateError> {
    if p.lat.is_finite() && p.lng.is_finite() {
        Ok(p)
    } else {
        Err(CoordinateError::NonFinite { index })
    }
}

/// `[lat, lng]` pairs -> points
pub fn ring_from_pairs(pairs: &[[f64; 2]]) -> Result<Ring, CoordinateError> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, &[lat, lng])| check_finite(i, GeoPoint::new(lat, lng)))
        .collect()
}

/// points -> `[lat, lng]` pairs
pub fn ring_to_pairs(ring: &[GeoPoint]) -> Vec<[f64; 2]> {
    ring.iter().map(|p| [p.lat, p.lng]).collect()
}

/// Decode a stored ring (`[[lat, lng], ...]`)
pub fn decode_ring(json: &str) -> Result<Ring, CoordinateError> {
    let pairs: Vec<[f64; 2]> = serde_json::from_str(json)?;
    ring_from_pairs(&pairs)
}

pub fn encode_ring(ring: &[GeoPoint]) -> String {
    // A Vec of [f64; 2] always serializes
    serde_json::to_string(&ring_to_pairs(ring)).unwrap_or_default()
}

/// Decode road geometry from a stored value.
///
/// The value may be the geometry itself or a JSON string containing it.
pub fn decode_road_geometry(value: &Value) -> Result<RoadGeometry, CoordinateError> {
    let wire: RoadGeometryWire = match value {
        Value::String(s) => serde_json::from_str(s)?,
        other => RoadGeometryWire::deserialize(other)?,
    };

    match wire {
        RoadGeometryWire::GeoJson(GeoJsonGeometry::LineString { coordinates }) => {
            let path = coordinates
                .iter()
                .enumerate()
                .map(|(i, pos)| match pos.as_slice() {
                    // Extra values (altitude) are allowed by GeoJSON and ignored
                    [lng, lat, ..] => check_finite(i, GeoPoint::new(*lat, *lng)),
                    _ => Err(CoordinateError::BadPosition {
                        index: i,
                        len: pos.len(),
                        expected: "at least 2",
                    }),
                })
                .collect::<Result<Path, _>>()?;
            Ok(RoadGeometry::LineString(path))
        }
        RoadGeometryWire::Raw(pairs) => {
            let path = pairs
                .iter()
                .enumerate()
                .map(|(i, pos)| match pos.as_slice() {
                    [lat, lng] => check_finite(i, GeoPoint::new(*lat, *lng)),
                    _ => Err(CoordinateError::BadPosition {
                        index: i,
                        len: pos.len(),
                        expected: "exactly 2",
                    }),
                })
                .collect::<Result<Path, _>>()?;
            Ok(RoadGeometry::RawPoints(path))
        }
    }
}

/// Encode a path as a GeoJSON LineString, the form new rows are written in
pub fn encode_road_geometry(path: &[GeoPoint]) -> Value {
    let geometry = GeoJsonGeometry::LineString {
        coordinates: path.iter().map(|p| vec![p.lng, p.lat]).collect(),
    };
    serde_json::to_value(geometry).unwrap_or(Value::Null)
}

/// `#[serde(with = "stored_ring")]` adapter for ring fields
pub mod stored_ring {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

    use crate::domain::{GeoPoint, Ring};

    pub fn serialize<S: Serializer>(ring: &[GeoPoint], serializer: S) -> Result<S::Ok, S::Error> {
        super::ring_to_pairs(ring).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Ring, D::Error> {
        let pairs = Option::<Vec<[f64; 2]>>::deserialize(deserializer)?.unwrap_or_default();
        super::ring_from_pairs(&pairs).map_err(D::Error::custom)
    }
}
