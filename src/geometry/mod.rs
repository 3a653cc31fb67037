pub mod area;
pub mod containment;
pub mod format;
pub mod geodesic;
pub mod length;

pub use area::{MIN_RING_POINTS, compute_area};
pub use containment::is_point_in_polygon;
pub use format::{format_area, format_length};
pub use length::{compute_path_length, distance_between};
