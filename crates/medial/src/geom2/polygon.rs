//! Simple 2D polygon: an implicitly closed, immutable vertex loop.
//!
//! Invariants (checked by `Polygon::new`):
//! - At least 3 vertices, all coordinates finite.
//! - No two consecutive vertices coincide (the loop closes from last to first).
//!
//! Queries are read-only; simplicity is reported, not enforced.

use nalgebra::Vector2;

use super::predicates::{on_segment, orient2d, segments_intersect};
use super::types::{BoundedSide, GeomCfg, Orientation, Segment2};
use crate::error::MedialError;

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vector2<f64>>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vector2<f64>>) -> Result<Self, MedialError> {
        let n = vertices.len();
        if n < 3 {
            return Err(MedialError::invalid_polygon(format!(
                "need at least 3 vertices, got {n}"
            )));
        }
        if let Some(i) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return Err(MedialError::invalid_polygon(format!(
                "vertex {i} has a non-finite coordinate"
            )));
        }
        for i in 0..n {
            let j = (i + 1) % n;
            if vertices[i] == vertices[j] {
                return Err(MedialError::invalid_polygon(format!(
                    "consecutive vertices {i} and {j} coincide"
                )));
            }
        }
        Ok(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a constructed polygon; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges in boundary order, including the closing edge (last → first).
    pub fn edges(&self) -> impl Iterator<Item = Segment2> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace area, positive for counter-clockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let v0 = self.vertices[0];
        let twice: f64 = self
            .vertices
            .windows(2)
            .skip(1)
            .map(|w| orient2d(v0, w[0], w[1]))
            .sum();
        0.5 * twice
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_sign(self.signed_area())
    }

    /// No two non-adjacent edges intersect and no adjacent pair folds back onto itself.
    pub fn is_simple(&self) -> bool {
        let n = self.vertices.len();
        let v = &self.vertices;
        for i in 0..n {
            let (a, b) = (v[i], v[(i + 1) % n]);
            for j in (i + 1)..n {
                let (c, d) = (v[j], v[(j + 1) % n]);
                if j == i + 1 {
                    // shared vertex b == c
                    if on_segment(d, a, b) || on_segment(a, c, d) {
                        return false;
                    }
                } else if i == 0 && j == n - 1 {
                    // shared vertex a == d
                    if on_segment(c, a, b) || on_segment(b, c, d) {
                        return false;
                    }
                } else if segments_intersect(a, b, c, d) {
                    return false;
                }
            }
        }
        true
    }

    /// Simple, and every non-degenerate turn has the same sense.
    pub fn is_convex(&self) -> bool {
        if !self.is_simple() {
            return false;
        }
        let n = self.vertices.len();
        let (mut left, mut right) = (false, false);
        for i in 0..n {
            let prev = self.vertices[(i + n - 1) % n];
            let next = self.vertices[(i + 1) % n];
            match Orientation::from_sign(orient2d(prev, self.vertices[i], next)) {
                Orientation::CounterClockwise => left = true,
                Orientation::Clockwise => right = true,
                Orientation::Collinear => {}
            }
        }
        left != right
    }

    /// Axis-aligned bounding box `(min, max)`.
    pub fn bbox(&self) -> (Vector2<f64>, Vector2<f64>) {
        let mut lo = self.vertices[0];
        let mut hi = self.vertices[0];
        for p in &self.vertices[1..] {
            lo = lo.inf(p);
            hi = hi.sup(p);
        }
        (lo, hi)
    }

    /// Bounding-box diagonal; the scale for relative tolerances.
    pub fn diameter(&self) -> f64 {
        let (lo, hi) = self.bbox();
        (hi - lo).norm()
    }

    /// Classify `p` with the default tolerance (`GeomCfg::default()`).
    #[inline]
    pub fn bounded_side(&self, p: Vector2<f64>) -> BoundedSide {
        self.bounded_side_with(p, GeomCfg::default())
    }

    /// Winding-number containment. Points exactly on an edge, or within
    /// `cfg.eps_boundary * diameter` of one, are `OnBoundary`, never `Inside`.
    pub fn bounded_side_with(&self, p: Vector2<f64>, cfg: GeomCfg) -> BoundedSide {
        let tol = cfg.eps_boundary.max(0.0) * self.diameter();
        let mut winding: i64 = 0;
        for e in self.edges() {
            if on_segment(p, e.a, e.b) || (tol > 0.0 && e.distance_to(p) <= tol) {
                return BoundedSide::OnBoundary;
            }
            if e.a.y <= p.y {
                if e.b.y > p.y && orient2d(e.a, e.b, p) > 0.0 {
                    winding += 1;
                }
            } else if e.b.y <= p.y && orient2d(e.a, e.b, p) < 0.0 {
                winding -= 1;
            }
        }
        if winding != 0 {
            BoundedSide::Inside
        } else {
            BoundedSide::Outside
        }
    }
}
