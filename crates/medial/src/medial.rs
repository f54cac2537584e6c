//! Medial-axis filter: the part of the Voronoi dual strictly inside the polygon.
//!
//! Model
//! - A dual vertex is kept iff the polygon classifies it `Inside`; boundary points are
//!   excluded. A dual edge is kept iff both endpoints are kept. Segments whose interior
//!   leaves a non-convex polygon are not detected (the triangulation covers the convex
//!   hull, not the polygon).
//! - Circumcenters of co-circular faces coincide (up to rounding). They are reported once,
//!   at their first occurrence, and the zero-length dual edges between them are dropped.
//!   "Coincide" means within `eps_boundary * diameter`, the same scale used for the
//!   boundary test.
//! - Output follows face order and `interior_edges` order.
//!
//! References
//! - Code cross-refs: `dual::dual_vertices`, `Polygon::bounded_side_with`.

use nalgebra::Vector2;
use tracing::debug;

use crate::analysis::{analyze, PolygonReport};
use crate::delaunay::{triangulate, Triangulation};
use crate::dual::dual_vertices;
use crate::error::MedialError;
use crate::geom2::{BoundedSide, GeomCfg, Polygon, Segment2};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MedialAxis {
    pub points: Vec<Vector2<f64>>,
    pub segments: Vec<Segment2>,
}

impl MedialAxis {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.segments.is_empty()
    }
}

/// Filter the dual of `t` against `polygon` with the default tolerance.
pub fn medial_axis(polygon: &Polygon, t: &Triangulation) -> MedialAxis {
    medial_axis_with(polygon, t, GeomCfg::default())
}

pub fn medial_axis_with(polygon: &Polygon, t: &Triangulation, cfg: GeomCfg) -> MedialAxis {
    let tol = cfg.eps_boundary.max(0.0) * polygon.diameter();
    let centers = dual_vertices(t);
    let inside: Vec<bool> = centers
        .iter()
        .map(|&c| polygon.bounded_side_with(c, cfg) == BoundedSide::Inside)
        .collect();

    let mut points: Vec<Vector2<f64>> = Vec::new();
    for (c, _) in centers.iter().zip(&inside).filter(|&(_, &keep)| keep) {
        if !points.iter().any(|q| (q - c).norm() <= tol) {
            points.push(*c);
        }
    }

    let segments: Vec<Segment2> = t
        .interior_edges()
        .filter(|(f, g)| inside[f.0] && inside[g.0])
        .map(|(f, g)| Segment2::new(centers[f.0], centers[g.0]))
        .filter(|s| s.length() > tol)
        .collect();

    debug!(
        dual_vertices = centers.len(),
        points = points.len(),
        segments = segments.len(),
        "medial axis filtered"
    );
    MedialAxis { points, segments }
}

/// Triangulate the polygon's vertices and filter the dual with the default tolerance.
pub fn compute_medial_axis(polygon: &Polygon) -> Result<MedialAxis, MedialError> {
    compute_medial_axis_with(polygon, GeomCfg::default())
}

pub fn compute_medial_axis_with(
    polygon: &Polygon,
    cfg: GeomCfg,
) -> Result<MedialAxis, MedialError> {
    let t = triangulate(polygon.vertices())?;
    Ok(medial_axis_with(polygon, &t, cfg))
}

/// Everything a display consumer needs for one loaded polygon, computed once.
#[derive(Clone, Debug)]
pub struct MedialScene {
    polygon: Polygon,
    report: PolygonReport,
    axis: MedialAxis,
}

impl MedialScene {
    pub fn build(polygon: Polygon) -> Result<Self, MedialError> {
        Self::build_with(polygon, GeomCfg::default())
    }

    pub fn build_with(polygon: Polygon, cfg: GeomCfg) -> Result<Self, MedialError> {
        let report = analyze(&polygon);
        let axis = compute_medial_axis_with(&polygon, cfg)?;
        Ok(Self {
            polygon,
            report,
            axis,
        })
    }

    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    #[inline]
    pub fn report(&self) -> &PolygonReport {
        &self.report
    }

    #[inline]
    pub fn axis(&self) -> &MedialAxis {
        &self.axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::rand::{sample_polygon, RadialCfg};
    use nalgebra::vector;
    use proptest::prelude::*;

    fn poly(pts: &[(f64, f64)]) -> Polygon {
        Polygon::new(pts.iter().map(|&(x, y)| Vector2::new(x, y)).collect()).unwrap()
    }

    fn regular(n: usize, r: f64) -> Polygon {
        let pts = (0..n)
            .map(|k| {
                let th = std::f64::consts::TAU * k as f64 / n as f64;
                Vector2::new(r * th.cos(), r * th.sin())
            })
            .collect();
        Polygon::new(pts).unwrap()
    }

    #[test]
    fn square_collapses_to_center() {
        let sq = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let axis = compute_medial_axis(&sq).unwrap();
        assert_eq!(axis.points, vec![vector![2.0, 2.0]]);
        assert!(axis.segments.is_empty());
    }

    #[test]
    fn regular_pentagon_is_one_point() {
        let pent = regular(5, 10.0);
        let axis = compute_medial_axis(&pent).unwrap();
        assert_eq!(axis.points.len(), 1);
        assert!(axis.points[0].norm() < 1e-9);
        assert!(axis.segments.is_empty());
    }

    #[test]
    fn house_has_roof_bisector() {
        let house = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 6.0), (0.0, 4.0)]);
        let axis = compute_medial_axis(&house).unwrap();
        let mut pts = axis.points.clone();
        pts.sort_by(|a, b| a.y.total_cmp(&b.y));
        assert_eq!(pts, vec![vector![2.0, 2.0], vector![2.0, 4.0]]);
        assert_eq!(axis.segments.len(), 1);
        let s = axis.segments[0];
        let ends = if s.a.y < s.b.y { s } else { s.reversed() };
        assert_eq!(ends, Segment2::new(vector![2.0, 2.0], vector![2.0, 4.0]));
    }

    #[test]
    fn right_triangle_center_is_on_boundary() {
        let tri = poly(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
        let axis = compute_medial_axis(&tri).unwrap();
        assert!(axis.is_empty());
        let exact = compute_medial_axis_with(&tri, GeomCfg::exact()).unwrap();
        assert!(exact.is_empty());
    }

    #[test]
    fn acute_triangle_keeps_its_center() {
        let tri = poly(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]);
        let axis = compute_medial_axis(&tri).unwrap();
        assert_eq!(axis.points.len(), 1);
        assert!((axis.points[0] - vector![2.0, 5.0 / 6.0]).norm() < 1e-12);
        assert!(axis.segments.is_empty());
    }

    #[test]
    fn obtuse_triangle_center_is_outside() {
        let tri = poly(&[(0.0, 0.0), (10.0, 0.0), (5.0, 1.0)]);
        assert!(compute_medial_axis(&tri).unwrap().is_empty());
    }

    #[test]
    fn dipped_pentagon_drops_centers_in_the_notch() {
        let dipped = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 2.0), (0.0, 4.0)]);
        let t = triangulate(dipped.vertices()).unwrap();
        assert_eq!(t.len(), 4);
        // Three centers land on edges, the fourth at (2, 4) inside the notch.
        let centers = crate::dual::dual_vertices(&t);
        assert!(centers.contains(&vector![2.0, 4.0]));
        assert_eq!(dipped.bounded_side(vector![2.0, 4.0]), BoundedSide::Outside);
        assert!(medial_axis(&dipped, &t).is_empty());
    }

    #[test]
    fn scene_caches_report_and_axis() {
        let house = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 6.0), (0.0, 4.0)]);
        let scene = MedialScene::build(house.clone()).unwrap();
        assert_eq!(scene.polygon(), &house);
        assert!(scene.report().is_simple);
        assert_eq!(scene.axis(), &compute_medial_axis(&house).unwrap());
    }

    #[test]
    fn repeated_vertex_fails_before_filtering() {
        // Touches itself at (2, 2): not consecutive, so the polygon is constructible.
        let pinched = poly(&[
            (0.0, 0.0),
            (2.0, 2.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (2.0, 2.0),
            (0.0, 4.0),
        ]);
        assert!(matches!(
            compute_medial_axis(&pinched),
            Err(MedialError::DuplicateVertex {
                first: 1,
                second: 4
            })
        ));
        // A vertex file may spell the same point as -0 and 0.
        let signed = poly(&[(-0.0, 1.0), (5.0, 0.0), (0.0, 1.0), (-0.0, 2.0)]);
        assert!(matches!(
            compute_medial_axis(&signed),
            Err(MedialError::DuplicateVertex {
                first: 0,
                second: 2
            })
        ));
    }

    #[test]
    fn bundled_vertex_files_match_scenarios() {
        let load = |name: &str| {
            let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/polygons");
            let p = crate::io::load_polygon(format!("{dir}/{name}"), 300).unwrap();
            compute_medial_axis(&p).unwrap()
        };
        assert_eq!(load("square").points, vec![vector![2.0, 2.0]]);
        let pentagon = load("pentagon");
        assert_eq!(pentagon.points.len(), 1);
        assert!(pentagon.points[0].norm() < 1e-9);
        assert!(pentagon.segments.is_empty());
        let house = load("house");
        assert_eq!((house.points.len(), house.segments.len()), (2, 1));
        assert!(load("dipped").is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn axis_is_interior_and_reproducible(seed in any::<u64>()) {
            let p = sample_polygon(&RadialCfg::with_vertices(3, 60), seed).unwrap();
            let t = triangulate(p.vertices()).unwrap();
            let first = medial_axis(&p, &t);
            for q in &first.points {
                prop_assert_eq!(p.bounded_side(*q), BoundedSide::Inside);
            }
            for s in &first.segments {
                prop_assert_eq!(p.bounded_side(s.a), BoundedSide::Inside);
                prop_assert_eq!(p.bounded_side(s.b), BoundedSide::Inside);
            }
            let again = compute_medial_axis(&p).unwrap();
            prop_assert_eq!(first, again);
        }
    }
}
