pub mod boundary;
pub mod point;
pub mod road;

pub use boundary::{BoundaryRecord, LandUse};
pub use point::{GeoPoint, Path, Ring};
pub use road::{Road, RoadClass};
