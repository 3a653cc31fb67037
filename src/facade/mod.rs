//! Entry points used by the persistence and map-drawing callers.

pub mod boundary;
pub mod drawing;
pub mod road;

pub use boundary::{
    BoundaryStore, MemoryStore, StoreError, land_use_summary, recompute_areas, refresh_area,
    save_boundary, update_coordinates,
};
pub use drawing::{
    DrawingError, DrawingSession, FinishedShape, PointDecision, PreviewKind, ShapeKind,
    validate_point,
};
pub use road::{RoadLength, fill_description, road_from_storage};
