//! Delaunay triangulation of a planar point set.
//!
//! Purpose
//! - Build the unconstrained Delaunay triangulation of a polygon's vertices (its convex
//!   hull), with faces referencing the caller's points by index.
//! - Keep construction deterministic: insertion order and co-circular tie-breaks depend
//!   only on the point set, so the dual and the medial axis are reproducible.
//!
//! References
//! - Code cross-refs: `geom2::{orient2d, incircle}`, `dual::{dual_vertices, dual_edges}`.

mod build;
mod types;

pub use build::triangulate;
pub use types::{Face, FaceId, Triangulation};
