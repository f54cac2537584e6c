//! Polygon diagnostics reported before the medial axis is computed.
//!
//! A non-simple polygon still gets a medial axis (the triangulation only sees the
//! vertices), but callers should treat that result as advisory.

use std::fmt;

use crate::geom2::{Orientation, Polygon};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonReport {
    pub vertex_count: usize,
    pub is_simple: bool,
    pub is_convex: bool,
    pub orientation: Orientation,
    pub area: f64,
}

impl PolygonReport {
    /// True when the medial axis ignores self-intersections of the boundary.
    #[inline]
    pub fn is_advisory(&self) -> bool {
        !self.is_simple
    }
}

pub fn analyze(polygon: &Polygon) -> PolygonReport {
    let is_simple = polygon.is_simple();
    PolygonReport {
        vertex_count: polygon.len(),
        is_simple,
        is_convex: is_simple && polygon.is_convex(),
        orientation: polygon.orientation(),
        area: polygon.area(),
    }
}

impl fmt::Display for PolygonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let not = |b: bool| if b { "" } else { " not" };
        writeln!(f, "polygon is{} simple.", not(self.is_simple))?;
        writeln!(f, "polygon is{} convex.", not(self.is_convex))?;
        let orientation = match self.orientation {
            Orientation::CounterClockwise => "counter-clockwise",
            Orientation::Clockwise => "clockwise",
            Orientation::Collinear => "degenerate",
        };
        write!(
            f,
            "{} vertices, {orientation}, area {}",
            self.vertex_count, self.area
        )
    }
}
