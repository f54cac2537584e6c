//! Data types for the triangulation: faces addressed by `FaceId`, vertices by input index.

use nalgebra::Vector2;

use crate::geom2::incircle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

/// Finite triangle: counter-clockwise vertex indices into `Triangulation::points`.
/// `neighbors[i]` is the face across the edge opposite `vertices[i]`, or `None` on the hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub vertices: [usize; 3],
    pub neighbors: [Option<FaceId>; 3],
}

impl Face {
    /// Edge opposite vertex `i`, oriented as in the face.
    #[inline]
    pub fn edge(&self, i: usize) -> (usize, usize) {
        (self.vertices[(i + 1) % 3], self.vertices[(i + 2) % 3])
    }

    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }
}

/// Delaunay triangulation of a point set. Owns the points (input order) and the finite
/// faces covering their convex hull.
#[derive(Clone, Debug)]
pub struct Triangulation {
    pub(crate) points: Vec<Vector2<f64>>,
    pub(crate) faces: Vec<Face>,
}

impl Triangulation {
    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> {
        (0..self.faces.len()).map(FaceId)
    }

    /// Corner coordinates of a face (counter-clockwise).
    pub fn triangle(&self, id: FaceId) -> [Vector2<f64>; 3] {
        let [a, b, c] = self.faces[id.0].vertices;
        [self.points[a], self.points[b], self.points[c]]
    }

    /// Every pair of adjacent faces exactly once, in face order (`lower < higher`).
    pub fn interior_edges(&self) -> impl Iterator<Item = (FaceId, FaceId)> + '_ {
        self.faces.iter().enumerate().flat_map(|(i, f)| {
            f.neighbors
                .iter()
                .filter_map(move |&n| n.filter(|j| j.0 > i).map(|j| (FaceId(i), j)))
        })
    }

    /// Hull edges as oriented vertex pairs (interior on the left), in face order.
    pub fn hull_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.faces.iter().flat_map(|f| {
            (0..3).filter_map(move |i| f.neighbors[i].is_none().then(|| f.edge(i)))
        })
    }

    /// Exhaustive empty-circumcircle check: no input point lies strictly inside the
    /// circumcircle of any face. Quadratic; meant for tests and diagnostics.
    pub fn is_delaunay(&self) -> bool {
        self.faces.iter().all(|f| {
            let [a, b, c] = f.vertices.map(|v| self.points[v]);
            self.points
                .iter()
                .enumerate()
                .filter(|(k, _)| !f.contains_vertex(*k))
                .all(|(_, &p)| incircle(a, b, c, p) <= 0.0)
        })
    }
}
