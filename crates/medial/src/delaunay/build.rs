//! Incremental Bowyer–Watson construction.
//!
//! Model
//! - Instead of a finite seed triangle, the hull is closed with a single symbolic vertex
//!   at infinity: every hull edge carries a ghost triangle `(u, v, ∞)` whose outside lies
//!   to the left of `u → v`. A ghost conflicts with `p` when `p` is strictly outside its
//!   edge or on the open edge; a finite triangle conflicts when `p` is strictly inside
//!   its circumcircle. Dropping the ghosts at the end leaves exactly the convex hull.
//! - Points are inserted in lexicographic `(x, y)` order. Co-circular points are never in
//!   conflict, so the result depends only on the point set, not on the input order.
//! - Conflict detection scans all live triangles (quadratic overall), which is ample for
//!   polygon-sized inputs.

use std::collections::HashMap;

use nalgebra::Vector2;
use tracing::debug;

use super::types::{Face, FaceId, Triangulation};
use crate::error::MedialError;
use crate::geom2::predicates::{incircle, orient2d, strictly_between};

const GHOST: usize = usize::MAX;

/// Counter-clockwise triple; a ghost when the last slot is `GHOST`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tri([usize; 3]);

impl Tri {
    /// Rotate so that a ghost vertex, if any, sits in the last slot.
    fn normalized(a: usize, b: usize, c: usize) -> Self {
        if a == GHOST {
            Tri([b, c, a])
        } else if b == GHOST {
            Tri([c, a, b])
        } else {
            Tri([a, b, c])
        }
    }

    #[inline]
    fn is_ghost(&self) -> bool {
        self.0[2] == GHOST
    }

    #[inline]
    fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.0;
        [(a, b), (b, c), (c, a)]
    }
}

#[inline]
fn undirected(u: usize, v: usize) -> (usize, usize) {
    if u < v {
        (u, v)
    } else {
        (v, u)
    }
}

struct Builder<'a> {
    points: &'a [Vector2<f64>],
    tris: Vec<Tri>,
}

impl<'a> Builder<'a> {
    fn seeded(points: &'a [Vector2<f64>], a: usize, b: usize, c: usize) -> Self {
        let (b, c) = if orient2d(points[a], points[b], points[c]) > 0.0 {
            (b, c)
        } else {
            (c, b)
        };
        let tris = vec![
            Tri([a, b, c]),
            Tri([b, a, GHOST]),
            Tri([c, b, GHOST]),
            Tri([a, c, GHOST]),
        ];
        Self { points, tris }
    }

    fn conflicts(&self, t: Tri, p: Vector2<f64>) -> bool {
        let [a, b, c] = t.0;
        let (pa, pb) = (self.points[a], self.points[b]);
        if t.is_ghost() {
            let o = orient2d(pa, pb, p);
            o > 0.0 || (o == 0.0 && strictly_between(p, pa, pb))
        } else {
            incircle(pa, pb, self.points[c], p) > 0.0
        }
    }

    fn insert(&mut self, i: usize) -> Result<(), MedialError> {
        let p = self.points[i];
        let bad: Vec<bool> = self.tris.iter().map(|&t| self.conflicts(t, p)).collect();
        let cavity: Vec<Tri> = self
            .tris
            .iter()
            .zip(&bad)
            .filter_map(|(t, &b)| b.then_some(*t))
            .collect();
        if cavity.is_empty() {
            return Err(MedialError::degenerate(format!(
                "point {i} conflicts with no triangle"
            )));
        }

        // Cavity boundary: edges used by exactly one conflicting triangle.
        let mut uses: HashMap<(usize, usize), u8> = HashMap::new();
        for t in &cavity {
            for (u, v) in t.edges() {
                *uses.entry(undirected(u, v)).or_insert(0) += 1;
            }
        }
        let mut next: Vec<Tri> = self
            .tris
            .iter()
            .zip(&bad)
            .filter_map(|(t, &b)| (!b).then_some(*t))
            .collect();
        for t in &cavity {
            for (u, v) in t.edges() {
                if uses[&undirected(u, v)] == 1 {
                    next.push(Tri::normalized(u, v, i));
                }
            }
        }
        self.tris = next;
        Ok(())
    }

    fn finish(self) -> Triangulation {
        let solid: Vec<[usize; 3]> = self
            .tris
            .iter()
            .filter(|t| !t.is_ghost())
            .map(|t| t.0)
            .collect();
        let mut by_edge: HashMap<(usize, usize), usize> = HashMap::with_capacity(3 * solid.len());
        for (fi, v) in solid.iter().enumerate() {
            for k in 0..3 {
                by_edge.insert((v[k], v[(k + 1) % 3]), fi);
            }
        }
        let faces = solid
            .iter()
            .map(|&vertices| {
                let mut neighbors = [None; 3];
                for (k, slot) in neighbors.iter_mut().enumerate() {
                    let (u, v) = (vertices[(k + 1) % 3], vertices[(k + 2) % 3]);
                    *slot = by_edge.get(&(v, u)).map(|&j| FaceId(j));
                }
                Face {
                    vertices,
                    neighbors,
                }
            })
            .collect();
        Triangulation {
            points: self.points.to_vec(),
            faces,
        }
    }
}

/// Delaunay triangulation of `points` (any order, no duplicates).
///
/// Face vertex indices refer to `points`. Fails with `DuplicateVertex` for exactly
/// coincident points and with `DegenerateInput` for fewer than 3 points, non-finite
/// coordinates, or an all-collinear set.
pub fn triangulate(points: &[Vector2<f64>]) -> Result<Triangulation, MedialError> {
    let n = points.len();
    if n < 3 {
        return Err(MedialError::degenerate(format!(
            "need at least 3 points, got {n}"
        )));
    }
    if let Some(i) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(MedialError::degenerate(format!(
            "point {i} has a non-finite coordinate"
        )));
    }

    // `+ 0.0` maps -0.0 to +0.0 so that `==`-equal points sort next to each other.
    let key = |i: usize| (points[i].x + 0.0, points[i].y + 0.0);
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| {
        let ((xi, yi), (xj, yj)) = (key(i), key(j));
        xi.total_cmp(&xj).then(yi.total_cmp(&yj))
    });
    for w in order.windows(2) {
        if points[w[0]] == points[w[1]] {
            return Err(MedialError::DuplicateVertex {
                first: w[0].min(w[1]),
                second: w[0].max(w[1]),
            });
        }
    }

    let (a, b) = (order[0], order[1]);
    let Some(k) = (2..n).find(|&k| orient2d(points[a], points[b], points[order[k]]) != 0.0) else {
        return Err(MedialError::degenerate("all points are collinear"));
    };
    let mut builder = Builder::seeded(points, a, b, order[k]);
    for (pos, &i) in order.iter().enumerate().skip(2) {
        if pos != k {
            builder.insert(i)?;
        }
    }
    let tri = builder.finish();
    debug!(points = n, faces = tri.faces.len(), "triangulated");
    Ok(tri)
}
