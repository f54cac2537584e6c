//! 2D geometry: points, segments, polygons, and robust predicates.
//!
//! Purpose
//! - Points are `nalgebra::Vector2<f64>` throughout; `Segment2` and `Polygon` are value
//!   types built on them.
//! - Orientation and in-circle decisions go through the adaptive predicates in
//!   `predicates`, so topology never depends on rounding. Constructed points
//!   (circumcenters) are classified with the explicit tolerance in `GeomCfg`.
//!
//! References
//! - Code cross-refs: `Polygon`, `orient2d`, `incircle`, `GeomCfg`, `rand::sample_polygon`

mod exact;
pub mod polygon;
pub mod predicates;
pub mod rand;
mod types;

pub use polygon::Polygon;
pub use predicates::{incircle, orient2d, orientation, segments_intersect};
pub use types::{BoundedSide, GeomCfg, Orientation, Segment2};
