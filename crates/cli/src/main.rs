use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use medial::geom2::GeomCfg;
use medial::io::{load_polygon, DEFAULT_MAX_VERTICES};
use medial::medial::MedialScene;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod provenance;

use export::Export;
use provenance::{write_sidecar, AxisSummary, RunParams};

#[derive(Parser)]
#[command(name = "medial")]
#[command(about = "Medial axis of a polygon from a vertex file")]
struct Cmd {
    /// Largest vertex count accepted from the input file
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_VERTICES)]
    max_vertices: usize,

    /// Boundary tolerance, relative to the polygon's bounding-box diagonal
    #[arg(long, global = true, default_value_t = GeomCfg::default().eps_boundary)]
    eps_boundary: f64,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print polygon diagnostics and medial-axis counts
    Analyze { input: PathBuf },
    /// Compute the medial axis and write it as JSON, with a provenance sidecar
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
}

struct Settings {
    max_vertices: usize,
    cfg: GeomCfg,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let settings = Settings {
        max_vertices: cmd.max_vertices,
        cfg: GeomCfg {
            eps_boundary: cmd.eps_boundary,
        },
    };
    match cmd.action {
        Action::Analyze { input } => analyze(&input, &settings),
        Action::Run { input, out } => run(&input, &out, &settings).map(|_| ()),
    }
}

/// Load once and compute once; every consumer reads the cached scene.
fn load_scene(input: &Path, settings: &Settings) -> Result<MedialScene> {
    let polygon = load_polygon(input, settings.max_vertices)
        .with_context(|| format!("loading polygon from {}", input.display()))?;
    let scene = MedialScene::build_with(polygon, settings.cfg)
        .with_context(|| format!("computing medial axis for {}", input.display()))?;
    let report = scene.report();
    tracing::info!(
        input = %input.display(),
        vertices = report.vertex_count,
        simple = report.is_simple,
        convex = report.is_convex,
        points = scene.axis().points.len(),
        segments = scene.axis().segments.len(),
        "medial axis"
    );
    if report.is_advisory() {
        tracing::warn!(
            input = %input.display(),
            "polygon is not simple; the medial axis is advisory only"
        );
    }
    Ok(scene)
}

fn analyze(input: &Path, settings: &Settings) -> Result<()> {
    let scene = load_scene(input, settings)?;
    println!("{}", scene.report());
    println!(
        "medial axis: {} points, {} segments",
        scene.axis().points.len(),
        scene.axis().segments.len()
    );
    Ok(())
}

/// Returns the provenance sidecar path.
fn run(input: &Path, out: &Path, settings: &Settings) -> Result<PathBuf> {
    let scene = load_scene(input, settings)?;
    let input_str = input.to_string_lossy();
    let export = Export::from_scene(&input_str, &scene);

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&export)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = RunParams {
        input: input_str.into_owned(),
        max_vertices: settings.max_vertices,
        eps_boundary: settings.cfg.eps_boundary,
    };
    let summary = AxisSummary {
        medial_points: export.medial_points.len(),
        medial_segments: export.medial_segments.len(),
        advisory: export.report.advisory,
    };
    let sidecar = write_sidecar(out, &params, &summary)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "run");
    Ok(sidecar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn settings() -> Settings {
        Settings {
            max_vertices: DEFAULT_MAX_VERTICES,
            cfg: GeomCfg::default(),
        }
    }

    #[test]
    fn run_writes_axis_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("house");
        std::fs::write(&input, "5\n0 0\n4 0\n4 4\n2 6\n0 4\n").unwrap();
        let out = dir.path().join("out/house.json");

        let sidecar = run(&input, &out, &settings()).unwrap();
        assert_eq!(sidecar, dir.path().join("out/house.provenance.json"));

        let doc: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["report"]["vertex_count"], 5);
        assert_eq!(doc["report"]["is_simple"], true);
        assert_eq!(doc["report"]["advisory"], false);
        assert_eq!(doc["vertices"].as_array().unwrap().len(), 5);
        assert_eq!(doc["medial_points"].as_array().unwrap().len(), 2);
        assert_eq!(doc["medial_segments"].as_array().unwrap().len(), 1);

        let prov: Value = serde_json::from_slice(&std::fs::read(&sidecar).unwrap()).unwrap();
        assert_eq!(prov["params"]["max_vertices"], 300);
        assert_eq!(prov["summary"]["medial_segments"], 1);
    }

    #[test]
    fn non_simple_input_is_flagged_advisory() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bowtie");
        std::fs::write(&input, "4 0 0 4 4 4 0 0 4").unwrap();
        let out = dir.path().join("bowtie.json");
        run(&input, &out, &settings()).unwrap();
        let doc: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["report"]["advisory"], true);
    }

    #[test]
    fn errors_name_the_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("big");
        std::fs::write(&input, "500 0 0").unwrap();
        let err = run(&input, &dir.path().join("x.json"), &settings()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("big"));
        assert!(msg.contains("exceeds maximum 300"));
        assert!(!dir.path().join("x.json").exists());
    }
}
