pub mod coords;
pub mod json_store;

pub use coords::{CoordinateError, RoadGeometry, decode_ring, decode_road_geometry};
pub use json_store::{JsonFileStore, read_records, write_records};
