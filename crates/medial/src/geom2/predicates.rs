//! Adaptive orientation and in-circle predicates.
//!
//! Each predicate evaluates the determinant in plain `f64` first and compares it
//! against a static forward error bound. Only when the result is within that bound
//! (near-collinear or near-co-circular input) is the determinant re-evaluated with
//! exact expansion arithmetic. The returned sign is therefore exact for finite input
//! without overflow; the magnitude is only an approximation.

use nalgebra::Vector2;

use super::exact::Expansion;
use super::types::Orientation;

/// Half an ulp of 1.0 (the unit roundoff of round-to-nearest).
const EPSILON: f64 = f64::EPSILON * 0.5;
const CCW_ERRBOUND: f64 = (3.0 + 16.0 * EPSILON) * EPSILON;
const ICC_ERRBOUND: f64 = (10.0 + 96.0 * EPSILON) * EPSILON;

/// Twice the signed area of triangle `abc`: positive if counter-clockwise.
pub fn orient2d(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let det_left = (a.x - c.x) * (b.y - c.y);
    let det_right = (a.y - c.y) * (b.x - c.x);
    let det = det_left - det_right;
    let bound = CCW_ERRBOUND * (det_left.abs() + det_right.abs());
    if det > bound || -det > bound {
        return det;
    }
    orient2d_exact(a, b, c).estimate()
}

fn orient2d_exact(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Expansion {
    let acx = Expansion::diff(a.x, c.x);
    let acy = Expansion::diff(a.y, c.y);
    let bcx = Expansion::diff(b.x, c.x);
    let bcy = Expansion::diff(b.y, c.y);
    acx.mul(&bcy).sub(&acy.mul(&bcx))
}

/// Orientation of the triple `abc` with an exact collinearity decision.
#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Orientation {
    Orientation::from_sign(orient2d(a, b, c))
}

/// Positive if `d` lies strictly inside the circle through the counter-clockwise
/// triangle `abc`, negative if outside, zero if the four points are co-circular.
pub fn incircle(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, d: Vector2<f64>) -> f64 {
    let adx = a.x - d.x;
    let bdx = b.x - d.x;
    let cdx = c.x - d.x;
    let ady = a.y - d.y;
    let bdy = b.y - d.y;
    let cdy = c.y - d.y;

    let bdxcdy = bdx * cdy;
    let cdxbdy = cdx * bdy;
    let alift = adx * adx + ady * ady;

    let cdxady = cdx * ady;
    let adxcdy = adx * cdy;
    let blift = bdx * bdx + bdy * bdy;

    let adxbdy = adx * bdy;
    let bdxady = bdx * ady;
    let clift = cdx * cdx + cdy * cdy;

    let det = alift * (bdxcdy - cdxbdy) + blift * (cdxady - adxcdy) + clift * (adxbdy - bdxady);
    let permanent = (bdxcdy.abs() + cdxbdy.abs()) * alift
        + (cdxady.abs() + adxcdy.abs()) * blift
        + (adxbdy.abs() + bdxady.abs()) * clift;
    let bound = ICC_ERRBOUND * permanent;
    if det > bound || -det > bound {
        return det;
    }
    incircle_exact(a, b, c, d).estimate()
}

fn incircle_exact(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
) -> Expansion {
    let adx = Expansion::diff(a.x, d.x);
    let ady = Expansion::diff(a.y, d.y);
    let bdx = Expansion::diff(b.x, d.x);
    let bdy = Expansion::diff(b.y, d.y);
    let cdx = Expansion::diff(c.x, d.x);
    let cdy = Expansion::diff(c.y, d.y);

    let alift = adx.mul(&adx).add(&ady.mul(&ady));
    let blift = bdx.mul(&bdx).add(&bdy.mul(&bdy));
    let clift = cdx.mul(&cdx).add(&cdy.mul(&cdy));

    let bc = bdx.mul(&cdy).sub(&cdx.mul(&bdy));
    let ca = cdx.mul(&ady).sub(&adx.mul(&cdy));
    let ab = adx.mul(&bdy).sub(&bdx.mul(&ady));

    alift.mul(&bc).add(&blift.mul(&ca)).add(&clift.mul(&ab))
}

/// `p` lies on the closed segment `[a, b]` (exact).
pub fn on_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> bool {
    orient2d(a, b, p) == 0.0 && within_box(p, a, b)
}

/// `p` lies strictly between `a` and `b` on the segment `[a, b]` (exact).
pub fn strictly_between(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> bool {
    on_segment(p, a, b) && p != a && p != b
}

#[inline]
fn within_box(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Closed segments `[p1, p2]` and `[q1, q2]` share at least one point (exact).
pub fn segments_intersect(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    q1: Vector2<f64>,
    q2: Vector2<f64>,
) -> bool {
    let d1 = orient2d(q1, q2, p1);
    let d2 = orient2d(q1, q2, p2);
    let d3 = orient2d(p1, p2, q1);
    let d4 = orient2d(p1, p2, q2);
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }
    (d1 == 0.0 && within_box(p1, q1, q2))
        || (d2 == 0.0 && within_box(p2, q1, q2))
        || (d3 == 0.0 && within_box(q1, p1, p2))
        || (d4 == 0.0 && within_box(q2, p1, p2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn orientation_signs() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        assert_eq!(orientation(a, b, vector![0.0, 1.0]), Orientation::CounterClockwise);
        assert_eq!(orientation(a, b, vector![0.0, -1.0]), Orientation::Clockwise);
        assert_eq!(orientation(a, b, vector![7.0, 0.0]), Orientation::Collinear);
    }

    #[test]
    fn near_collinear_is_decided_exactly() {
        // c sits one ulp above the line y = x; the naive determinant rounds to zero.
        let a = vector![0.5, 0.5];
        let b = vector![12.0, 12.0];
        let c = vector![24.0, 24.0 + 16.0 * f64::EPSILON];
        assert!(orient2d(a, b, c) > 0.0);
        let c_on = vector![24.0, 24.0];
        assert_eq!(orient2d(a, b, c_on), 0.0);
    }

    #[test]
    fn incircle_signs_and_cocircular_zero() {
        let a = vector![0.0, 0.0];
        let b = vector![4.0, 0.0];
        let c = vector![4.0, 4.0];
        assert!(incircle(a, b, c, vector![2.0, 2.0]) > 0.0);
        assert!(incircle(a, b, c, vector![10.0, 10.0]) < 0.0);
        // Fourth corner of the square is exactly co-circular.
        assert_eq!(incircle(a, b, c, vector![0.0, 4.0]), 0.0);
    }

    #[test]
    fn incircle_cocircular_and_tiny_nudge() {
        // Pythagorean points on x^2 + y^2 = 25, then d nudged inward by 1e-15.
        let a = vector![5.0, 0.0];
        let b = vector![0.0, 5.0];
        let c = vector![-3.0, 4.0];
        let d = vector![4.0, -3.0];
        assert_eq!(incircle(a, b, c, d), 0.0);
        let d_in = vector![4.0, -3.0 + 1e-15];
        assert!(incircle(a, b, c, d_in) > 0.0);
    }

    #[test]
    fn segment_intersection_cases() {
        let o = vector![0.0, 0.0];
        let x = vector![2.0, 0.0];
        assert!(segments_intersect(o, x, vector![1.0, -1.0], vector![1.0, 1.0]));
        assert!(segments_intersect(o, x, vector![2.0, 0.0], vector![3.0, 1.0]));
        assert!(segments_intersect(o, x, vector![1.0, 0.0], vector![3.0, 0.0]));
        assert!(!segments_intersect(o, x, vector![3.0, 0.0], vector![4.0, 0.0]));
        assert!(!segments_intersect(o, x, vector![0.0, 1.0], vector![2.0, 1.0]));
    }

    #[test]
    fn between_excludes_endpoints() {
        let a = vector![0.0, 0.0];
        let b = vector![2.0, 2.0];
        assert!(strictly_between(vector![1.0, 1.0], a, b));
        assert!(!strictly_between(a, a, b));
        assert!(!strictly_between(vector![3.0, 3.0], a, b));
        assert!(on_segment(b, a, b));
    }
}
