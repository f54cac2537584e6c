//! JSON shape of a `medial run` artifact.

use medial::geom2::{Orientation, Segment2};
use medial::medial::MedialScene;
use medial::Vec2;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Export {
    pub input: String,
    pub report: ReportOut,
    pub vertices: Vec<[f64; 2]>,
    pub medial_points: Vec<[f64; 2]>,
    pub medial_segments: Vec<[[f64; 2]; 2]>,
}

#[derive(Debug, Serialize)]
pub struct ReportOut {
    pub vertex_count: usize,
    pub is_simple: bool,
    pub is_convex: bool,
    pub orientation: &'static str,
    pub area: f64,
    /// Set for non-simple input: the medial axis ignores the self-intersections.
    pub advisory: bool,
}

#[inline]
fn xy(p: &Vec2<f64>) -> [f64; 2] {
    [p.x, p.y]
}

fn orientation_name(o: Orientation) -> &'static str {
    match o {
        Orientation::CounterClockwise => "ccw",
        Orientation::Clockwise => "cw",
        Orientation::Collinear => "degenerate",
    }
}

impl Export {
    pub fn from_scene(input: &str, scene: &MedialScene) -> Self {
        let r = scene.report();
        Self {
            input: input.to_string(),
            report: ReportOut {
                vertex_count: r.vertex_count,
                is_simple: r.is_simple,
                is_convex: r.is_convex,
                orientation: orientation_name(r.orientation),
                area: r.area,
                advisory: r.is_advisory(),
            },
            vertices: scene.polygon().vertices().iter().map(xy).collect(),
            medial_points: scene.axis().points.iter().map(xy).collect(),
            medial_segments: scene
                .axis()
                .segments
                .iter()
                .map(|s: &Segment2| [xy(&s.a), xy(&s.b)])
                .collect(),
        }
    }
}
