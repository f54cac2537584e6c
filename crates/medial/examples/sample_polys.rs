//! Print diagnostics and medial-axis sizes for a few random simple polygons.
//!
//! Usage:
//!   cargo run -p medial --example sample_polys -- star
//!   cargo run -p medial --example sample_polys -- round
//!
//! - star mode: strong radial jitter, mostly non-convex
//! - round mode: no radial jitter, convex

use medial::analysis::analyze;
use medial::geom2::rand::{sample_polygon, RadialCfg};
use medial::medial::compute_medial_axis;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "star".to_string());
    let cfg = match mode.as_str() {
        "star" => RadialCfg {
            radial_jitter: 0.6,
            ..RadialCfg::with_vertices(6, 30)
        },
        "round" => RadialCfg {
            angle_jitter: 0.2,
            radial_jitter: 0.0,
            ..RadialCfg::with_vertices(5, 30)
        },
        _ => {
            eprintln!("usage: sample_polys [star|round]");
            return;
        }
    };
    for index in 0..5 {
        let Ok(poly) = sample_polygon(&cfg, 2025 + index) else {
            continue;
        };
        let report = analyze(&poly);
        match compute_medial_axis(&poly) {
            Ok(axis) => println!(
                "{mode} sample {index}: n={}, convex={}, area={:.2}, points={}, segments={}",
                report.vertex_count,
                report.is_convex,
                report.area,
                axis.points.len(),
                axis.segments.len()
            ),
            Err(e) => println!("{mode} sample {index}: {e}"),
        }
    }
}
