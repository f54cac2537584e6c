//! Floating-point expansion arithmetic (exact sums and products of `f64`).
//!
//! An expansion is a sum of non-overlapping `f64` components stored in increasing order
//! of magnitude with zeros eliminated. Sums and products of finite doubles are represented
//! exactly as long as no intermediate value overflows or underflows; the sign of an
//! expansion is the sign of its largest component.
//!
//! References
//! - Shewchuk, "Adaptive Precision Floating-Point Arithmetic and Fast Robust Geometric
//!   Predicates" (1997): `Two-Sum`, `Two-Product`, `Grow-Expansion`, `Scale-Expansion`.

use std::cmp::Ordering;

#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let b_virtual = x - a;
    let a_virtual = x - b_virtual;
    let b_round = b - b_virtual;
    let a_round = a - a_virtual;
    (x, a_round + b_round)
}

#[inline]
fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    (x, b - (x - a))
}

/// `a * b = x + y` exactly; `mul_add` rounds once, so `y` is the exact residual.
#[inline]
fn two_product(a: f64, b: f64) -> (f64, f64) {
    let x = a * b;
    (x, a.mul_add(b, -x))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Expansion(Vec<f64>);

impl Expansion {
    #[cfg(test)]
    pub(crate) fn from_f64(a: f64) -> Self {
        if a == 0.0 {
            Self(Vec::new())
        } else {
            Self(vec![a])
        }
    }

    /// Exact `a - b`.
    pub(crate) fn diff(a: f64, b: f64) -> Self {
        let (x, y) = two_sum(a, -b);
        Self::from_pair(x, y)
    }

    fn from_pair(hi: f64, lo: f64) -> Self {
        let mut out = Vec::with_capacity(2);
        if lo != 0.0 {
            out.push(lo);
        }
        if hi != 0.0 {
            out.push(hi);
        }
        Self(out)
    }

    /// Add a single double (Grow-Expansion with zero elimination).
    fn grow(&self, b: f64) -> Self {
        let mut out = Vec::with_capacity(self.0.len() + 1);
        let mut q = b;
        for &e in &self.0 {
            let (sum, err) = two_sum(q, e);
            q = sum;
            if err != 0.0 {
                out.push(err);
            }
        }
        if q != 0.0 {
            out.push(q);
        }
        Self(out)
    }

    pub(crate) fn add(&self, other: &Expansion) -> Self {
        let mut acc = self.clone();
        for &f in &other.0 {
            acc = acc.grow(f);
        }
        acc
    }

    pub(crate) fn neg(&self) -> Self {
        Self(self.0.iter().map(|c| -c).collect())
    }

    pub(crate) fn sub(&self, other: &Expansion) -> Self {
        self.add(&other.neg())
    }

    /// Multiply by a single double (Scale-Expansion with zero elimination).
    fn scale(&self, b: f64) -> Self {
        let Some((&first, rest)) = self.0.split_first() else {
            return Self::default();
        };
        if b == 0.0 {
            return Self::default();
        }
        let mut out = Vec::with_capacity(2 * self.0.len());
        let (mut q, low) = two_product(first, b);
        if low != 0.0 {
            out.push(low);
        }
        for &e in rest {
            let (p_hi, p_lo) = two_product(e, b);
            let (sum, err) = two_sum(q, p_lo);
            if err != 0.0 {
                out.push(err);
            }
            let (next, err2) = fast_two_sum(p_hi, sum);
            if err2 != 0.0 {
                out.push(err2);
            }
            q = next;
        }
        if q != 0.0 {
            out.push(q);
        }
        Self(out)
    }

    pub(crate) fn mul(&self, other: &Expansion) -> Self {
        let mut acc = Self::default();
        for &f in &other.0 {
            acc = acc.add(&self.scale(f));
        }
        acc
    }

    pub(crate) fn sign(&self) -> Ordering {
        match self.0.last() {
            Some(&top) if top > 0.0 => Ordering::Greater,
            Some(&top) if top < 0.0 => Ordering::Less,
            _ => Ordering::Equal,
        }
    }

    /// Rounded value of the expansion; zero exactly when the expansion is zero.
    pub(crate) fn estimate(&self) -> f64 {
        match self.sign() {
            Ordering::Equal => 0.0,
            _ => self.0.iter().sum(),
        }
    }
}
