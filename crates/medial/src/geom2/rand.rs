//! Random simple polygons for property tests, benches, and demos.
//!
//! A polygon is drawn as a perturbed regular polygon around the origin: `n` angles with
//! bounded jitter (sorted, random phase) and an independently jittered radius per
//! vertex. Every angular gap stays below π, so the shape is star-shaped around the
//! origin, hence simple, and its vertices run counter-clockwise. Strong radial jitter
//! gives deeply non-convex shapes; zero radial jitter gives convex ones.
//!
//! Draws are pure functions of `(cfg, seed)`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::polygon::Polygon;
use crate::error::MedialError;

#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    /// Vertex count is uniform in `min_vertices..=max_vertices` (at least 3).
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// Angular jitter as a fraction of the spacing `2π/n`.
    pub angle_jitter: f64,
    /// Radii are `radius * (1 + u)` with `|u| <= radial_jitter` (capped at 0.95).
    pub radial_jitter: f64,
    pub radius: f64,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            min_vertices: 12,
            max_vertices: 12,
            angle_jitter: 0.3,
            radial_jitter: 0.5,
            radius: 10.0,
        }
    }
}

impl RadialCfg {
    pub fn with_vertices(min_vertices: usize, max_vertices: usize) -> Self {
        Self {
            min_vertices,
            max_vertices,
            ..Self::default()
        }
    }
}

/// Draw one counter-clockwise simple polygon. Fails only if two consecutive vertices
/// coincide after rounding.
pub fn sample_polygon(cfg: &RadialCfg, seed: u64) -> Result<Polygon, MedialError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let lo = cfg.min_vertices.max(3);
    let n = rng.gen_range(lo..=cfg.max_vertices.max(lo));
    let step = std::f64::consts::TAU / n as f64;
    // Gaps are at least (1 - 2 * jitter) * step; keep them below π for n = 3.
    let jitter = cfg
        .angle_jitter
        .clamp(0.0, 0.49)
        .min((n as f64 / 2.0 - 1.0) / 2.0 - 1e-3);
    let radial = cfg.radial_jitter.clamp(0.0, 0.95);
    let phase = rng.gen_range(0.0..std::f64::consts::TAU);

    let mut angles: Vec<f64> = (0..n)
        .map(|k| phase + (k as f64 + jitter * rng.gen_range(-1.0..=1.0)) * step)
        .collect();
    angles.sort_by(f64::total_cmp);
    let vertices = angles
        .into_iter()
        .map(|th| {
            let r = cfg.radius * (1.0 + radial * rng.gen_range(-1.0..=1.0));
            Vector2::new(r * th.cos(), r * th.sin())
        })
        .collect();
    Polygon::new(vertices)
}
