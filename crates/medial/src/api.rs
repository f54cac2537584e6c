//! Curated API for callers (UNSTABLE).
//!
//! Important
//! - This is not a stable public API. It is a convenience surface for the CLI, benches,
//!   and demos. Breaking changes are allowed.

// Geometry
pub use crate::geom2::{
    incircle, orient2d, orientation, segments_intersect, BoundedSide, GeomCfg, Orientation,
    Polygon, Segment2,
};
// Random simple polygons
pub use crate::geom2::rand::{sample_polygon, RadialCfg as PolygonSamplerCfg};
// Triangulation and dual
pub use crate::delaunay::{triangulate, Face, FaceId, Triangulation};
pub use crate::dual::{circumcenter, dual_edges, dual_vertices, voronoi_dual, VoronoiDual};
// Medial axis
pub use crate::analysis::{analyze, PolygonReport};
pub use crate::medial::{
    compute_medial_axis, compute_medial_axis_with, medial_axis, medial_axis_with, MedialAxis,
    MedialScene,
};
// Loading
pub use crate::error::MedialError;
pub use crate::io::{load_polygon, parse_polygon, DEFAULT_MAX_VERTICES};
