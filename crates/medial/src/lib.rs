//! Medial axis of a simple polygon via the Voronoi dual of its Delaunay triangulation.
//!
//! Pipeline
//! - vertex file → `Polygon` (`io`) → `Triangulation` of the vertices (`delaunay`) →
//!   circumcenters and dual segments (`dual`) → the part strictly inside the polygon
//!   (`medial`). `analysis` reports simplicity, convexity, orientation, and area.
//!
//! Numerics
//! - Orientation and in-circle tests are exact (adaptive predicates in `geom2`), so the
//!   triangulation topology never depends on rounding. The only tolerance is the
//!   relative boundary distance in `GeomCfg`, applied to constructed circumcenters.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; `api` is the curated
//!   surface for callers.

pub mod analysis;
pub mod api;
pub mod delaunay;
pub mod dual;
pub mod error;
pub mod geom2;
pub mod io;
pub mod medial;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::MedialError;
pub use geom2::GeomCfg;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analysis::{analyze, PolygonReport};
    pub use crate::delaunay::{triangulate, Triangulation};
    pub use crate::error::MedialError;
    pub use crate::geom2::{BoundedSide, GeomCfg, Orientation, Polygon, Segment2};
    pub use crate::io::{load_polygon, DEFAULT_MAX_VERTICES};
    pub use crate::medial::{compute_medial_axis, MedialAxis, MedialScene};
    pub use nalgebra::Vector2 as Vec2;
}
