//! Provenance sidecar for `medial run` artifacts.
//!
//! `<out stem>.provenance.json` records which build produced the artifact, from which
//! input and settings, and how large the resulting medial axis was.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// Settings a run was made with.
#[derive(Debug, Serialize)]
pub struct RunParams {
    pub input: String,
    pub max_vertices: usize,
    pub eps_boundary: f64,
}

/// Counts from the computed axis.
#[derive(Debug, Serialize)]
pub struct AxisSummary {
    pub medial_points: usize,
    pub medial_segments: usize,
    pub advisory: bool,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    crate_version: &'static str,
    callsite: Callsite,
    params: &'a RunParams,
    summary: &'a AxisSummary,
    artifact: String,
}

/// Write the sidecar next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar(
    artifact: &Path,
    params: &RunParams,
    summary: &AxisSummary,
) -> Result<PathBuf> {
    let caller = Location::caller();
    let doc = Sidecar {
        code_rev: code_rev(),
        crate_version: medial::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        params,
        summary,
        artifact: artifact.display().to_string(),
    };
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "medial".into(), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` at build time, else at run time, else "unknown".
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_artifact() {
        assert_eq!(
            sidecar_path(Path::new("out/house.json")),
            Path::new("out/house.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("axis")),
            Path::new("axis.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_params_and_counts() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("square.json");
        let params = RunParams {
            input: "data/polygons/square".into(),
            max_vertices: 300,
            eps_boundary: 1e-9,
        };
        let summary = AxisSummary {
            medial_points: 1,
            medial_segments: 0,
            advisory: false,
        };
        let path = write_sidecar(&artifact, &params, &summary).unwrap();
        assert_eq!(path, dir.path().join("square.provenance.json"));

        let doc: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(doc["params"]["input"], "data/polygons/square");
        assert_eq!(doc["params"]["max_vertices"], 300);
        assert_eq!(doc["summary"]["medial_points"], 1);
        assert_eq!(doc["artifact"], artifact.display().to_string());
        assert_eq!(doc["crate_version"], medial::VERSION);
        assert!(doc["callsite"]["line"].as_u64().is_some());
    }
}
