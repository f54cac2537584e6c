//! Voronoi dual of a Delaunay triangulation.
//!
//! Purpose
//! - Dual vertices are face circumcenters (one per finite face, face order).
//! - Dual edges join the circumcenters of two faces sharing an edge (one per interior
//!   edge, `Triangulation::interior_edges` order). Hull edges dualize to unbounded rays;
//!   those are counted but never materialized.
//!
//! The triangulation is never mutated; everything here is a pure derivation.

use nalgebra::Vector2;

use crate::delaunay::{FaceId, Triangulation};
use crate::geom2::{orient2d, Segment2};

/// Center of the circle through `a`, `b`, `c`; `None` for collinear triples.
///
/// Evaluated relative to `a` to limit cancellation for small triangles far from the origin.
pub fn circumcenter(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Option<Vector2<f64>> {
    let d = 2.0 * orient2d(a, b, c);
    if d == 0.0 {
        return None;
    }
    let (ab, ac) = (b - a, c - a);
    let (lb, lc) = (ab.norm_squared(), ac.norm_squared());
    let ux = (ac.y * lb - ab.y * lc) / d;
    let uy = (ab.x * lc - ac.x * lb) / d;
    Some(a + Vector2::new(ux, uy))
}

fn face_center(t: &Triangulation, f: FaceId) -> Vector2<f64> {
    let [a, b, c] = t.triangle(f);
    // Faces have exactly positive orientation; the centroid only covers an underflowing
    // determinant.
    circumcenter(a, b, c).unwrap_or_else(|| (a + b + c) / 3.0)
}

/// One circumcenter per face, indexed like `Triangulation::faces`.
pub fn dual_vertices(t: &Triangulation) -> Vec<Vector2<f64>> {
    t.face_ids().map(|f| face_center(t, f)).collect()
}

/// One segment per pair of adjacent faces, between their circumcenters.
pub fn dual_edges(t: &Triangulation) -> Vec<Segment2> {
    let centers = dual_vertices(t);
    t.interior_edges()
        .map(|(f, g)| Segment2::new(centers[f.0], centers[g.0]))
        .collect()
}

/// Indexed form of the dual: edges refer to `vertices` through the faces they join.
#[derive(Clone, Debug)]
pub struct VoronoiDual {
    pub vertices: Vec<Vector2<f64>>,
    pub edges: Vec<(FaceId, FaceId)>,
    /// Unbounded rays skipped, one per hull edge.
    pub rays: usize,
}

impl VoronoiDual {
    pub fn segment(&self, edge: (FaceId, FaceId)) -> Segment2 {
        Segment2::new(self.vertices[edge.0 .0], self.vertices[edge.1 .0])
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment2> + '_ {
        self.edges.iter().map(|&e| self.segment(e))
    }
}

pub fn voronoi_dual(t: &Triangulation) -> VoronoiDual {
    VoronoiDual {
        vertices: dual_vertices(t),
        edges: t.interior_edges().collect(),
        rays: t.hull_edges().count(),
    }
}
