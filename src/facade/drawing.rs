use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::{GeoPoint, Path, Ring};
use crate::geometry::{MIN_RING_POINTS, compute_area, compute_path_length, is_point_in_polygon};

/// Minimum vertex count for a finished polyline
pub const MIN_PATH_POINTS: usize = 2;

/// What a drawing session produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Closed parcel boundary
    Polygon,
    /// Open road line
    Polyline,
}

impl ShapeKind {
    pub fn min_points(self) -> usize {
        match self {
            ShapeKind::Polygon => MIN_RING_POINTS,
            ShapeKind::Polyline => MIN_PATH_POINTS,
        }
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "polygon" | "area" => Ok(ShapeKind::Polygon),
            "polyline" | "line" | "road" => Ok(ShapeKind::Polyline),
            _ => Err(format!(
                "Invalid shape: {}. Valid options: polygon, polyline",
                s
            )),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Polygon => f.write_str("polygon"),
            ShapeKind::Polyline => f.write_str("polyline"),
        }
    }
}

/// Outcome of offering one click to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointDecision {
    /// Point appended; `count` is the new vertex count
    Accepted { count: usize },
    /// Point lies outside the reference boundary and was dropped
    Rejected,
}

/// How the in-progress shape should be previewed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Empty,
    Line,
    Polygon,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DrawingError {
    #[error("a {kind} needs at least {need} points, got {have}")]
    TooFewPoints {
        kind: ShapeKind,
        have: usize,
        need: usize,
    },
}

/// A completed drawing
#[derive(Debug, Clone, PartialEq)]
pub enum FinishedShape {
    /// Explicitly closed ring (first point repeated at the end)
    Ring(Ring),
    Path(Path),
}

impl FinishedShape {
    /// Area in m² for rings, 0 for paths
    pub fn area(&self) -> f64 {
        match self {
            FinishedShape::Ring(ring) => compute_area(ring),
            FinishedShape::Path(_) => 0.0,
        }
    }

    /// Length in m for paths, 0 for rings
    pub fn length(&self) -> f64 {
        match self {
            FinishedShape::Ring(_) => 0.0,
            FinishedShape::Path(path) => compute_path_length(path),
        }
    }

    pub fn points(&self) -> &[GeoPoint] {
        match self {
            FinishedShape::Ring(p) | FinishedShape::Path(p) => p,
        }
    }
}

/// Whether a candidate point may be placed, given the enclosing boundary.
///
/// With no boundary every point is allowed.
pub fn validate_point(point: GeoPoint, boundary: Option<&[GeoPoint]>) -> bool {
    match boundary {
        Some(ring) => is_point_in_polygon(point, ring),
        None => true,
    }
}

/// Number of distinct positions in `points`, so repeated clicks and a
/// clicked closing vertex do not count towards the minimum
fn distinct_count(points: &[GeoPoint]) -> usize {
    let mut unique: Vec<GeoPoint> = Vec::with_capacity(points.len());
    for p in points {
        if !unique.contains(p) {
            unique.push(*p);
        }
    }
    unique.len()
}

/// Click-driven construction of a polygon or polyline, constrained to an
/// optional reference boundary.
#[derive(Debug, Clone)]
pub struct DrawingSession<'a> {
    kind: ShapeKind,
    boundary: Option<&'a [GeoPoint]>,
    points: Vec<GeoPoint>,
}

impl<'a> DrawingSession<'a> {
    pub fn new(kind: ShapeKind, boundary: Option<&'a [GeoPoint]>) -> Self {
        Self {
            kind,
            boundary,
            points: Vec::new(),
        }
    }

    /// Continue editing an existing shape, e.g. a stored road
    pub fn resume(
        kind: ShapeKind,
        boundary: Option<&'a [GeoPoint]>,
        points: Vec<GeoPoint>,
    ) -> Self {
        Self {
            kind,
            boundary,
            points,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn add_point(&mut self, point: GeoPoint) -> PointDecision {
        if !validate_point(point, self.boundary) {
            log::debug!("rejected {} point outside boundary: {}", self.kind, point);
            return PointDecision::Rejected;
        }
        self.points.push(point);
        PointDecision::Accepted {
            count: self.points.len(),
        }
    }

    /// Vertices that count towards finishing: distinct positions for a
    /// polygon, every click for a polyline
    pub fn vertex_count(&self) -> usize {
        match self.kind {
            ShapeKind::Polygon => distinct_count(&self.points),
            ShapeKind::Polyline => self.points.len(),
        }
    }

    pub fn preview(&self) -> PreviewKind {
        if self.points.is_empty() {
            return PreviewKind::Empty;
        }
        match self.kind {
            ShapeKind::Polygon if self.vertex_count() >= MIN_RING_POINTS => PreviewKind::Polygon,
            _ => PreviewKind::Line,
        }
    }

    /// Live area of the in-progress polygon, 0 until it has three points
    pub fn preview_area(&self) -> f64 {
        match self.kind {
            ShapeKind::Polygon => compute_area(&self.points),
            ShapeKind::Polyline => 0.0,
        }
    }

    /// Live length of the in-progress line
    pub fn preview_length(&self) -> f64 {
        compute_path_length(&self.points)
    }

    pub fn can_finish(&self) -> bool {
        self.vertex_count() >= self.kind.min_points()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Complete the shape. Polygons are closed by repeating the first point.
    pub fn finish(self) -> Result<FinishedShape, DrawingError> {
        if !self.can_finish() {
            return Err(DrawingError::TooFewPoints {
                kind: self.kind,
                have: self.vertex_count(),
                need: self.kind.min_points(),
            });
        }

        let mut points = self.points;
        match self.kind {
            ShapeKind::Polygon => {
                if points.first() != points.last() {
                    points.push(points[0]);
                }
                Ok(FinishedShape::Ring(points))
            }
            ShapeKind::Polyline => Ok(FinishedShape::Path(points)),
        }
    }
}
