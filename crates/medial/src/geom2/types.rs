//! Basic 2D types and tolerances.
//!
//! - `GeomCfg`: centralizes the boundary tolerance used when classifying
//!   constructed (inexact) points such as circumcenters.
//! - `Segment2`: closed segment between two points.
//! - `Orientation`, `BoundedSide`: results of the orientation and containment queries.

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
///
/// `eps_boundary` is relative: the absolute band is `eps_boundary * diameter`, where
/// `diameter` is the bounding-box diagonal of the polygon being queried.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_boundary: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_boundary: 1e-9 }
    }
}

impl GeomCfg {
    /// Zero tolerance: classification relies on the exact predicates only.
    pub fn exact() -> Self {
        Self { eps_boundary: 0.0 }
    }
}

/// Result of an orientation test or of a polygon's signed area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

impl Orientation {
    #[inline]
    pub fn from_sign(det: f64) -> Self {
        if det > 0.0 {
            Orientation::CounterClockwise
        } else if det < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }
}

/// Point-containment classification relative to a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundedSide {
    Inside,
    OnBoundary,
    Outside,
}

/// Closed segment `[a, b]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Segment2 {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
    #[inline]
    pub fn midpoint(&self) -> Vector2<f64> {
        (self.a + self.b) * 0.5
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
    /// Euclidean distance from `p` to the closed segment.
    pub fn distance_to(&self, p: Vector2<f64>) -> f64 {
        let d = self.b - self.a;
        let len2 = d.norm_squared();
        if len2 == 0.0 {
            return (p - self.a).norm();
        }
        let t = ((p - self.a).dot(&d) / len2).clamp(0.0, 1.0);
        (p - (self.a + d * t)).norm()
    }
}
