//! Vertex-file loader.
//!
//! Format: whitespace-delimited tokens. The first is the vertex count `n`, followed by `n`
//! `x y` pairs in boundary order. Token positions in errors are 0-based indices into the
//! token stream (the count is token 0).

use std::fs;
use std::path::Path;

use nalgebra::Vector2;
use tracing::{debug, warn};

use crate::error::MedialError;
use crate::geom2::Polygon;

/// Maximum vertex count accepted by default.
pub const DEFAULT_MAX_VERTICES: usize = 300;

pub fn parse_polygon(text: &str, max_vertices: usize) -> Result<Polygon, MedialError> {
    let mut tokens = text.split_whitespace().enumerate();
    let Some((_, head)) = tokens.next() else {
        return Err(MedialError::invalid_polygon("empty input, missing vertex count"));
    };
    let declared: usize = head.parse().map_err(|_| MedialError::MalformedToken {
        position: 0,
        token: head.to_string(),
    })?;
    if declared > max_vertices {
        return Err(MedialError::VertexCountExceeded {
            declared,
            max: max_vertices,
        });
    }

    // Each value takes at least one byte, so the text bounds what can be read.
    let wanted = declared.saturating_mul(2);
    let mut coords = Vec::with_capacity(wanted.min(text.len()));
    for (position, tok) in tokens.by_ref().take(wanted) {
        let value: f64 = tok.parse().map_err(|_| MedialError::MalformedToken {
            position,
            token: tok.to_string(),
        })?;
        coords.push(value);
    }
    if coords.len() < wanted {
        return Err(MedialError::TruncatedInput {
            declared,
            found: coords.len() / 2,
        });
    }
    let trailing = tokens.count();
    if trailing > 0 {
        warn!(trailing, declared, "ignoring tokens after the declared vertices");
    }

    let vertices = coords
        .chunks_exact(2)
        .map(|xy| Vector2::new(xy[0], xy[1]))
        .collect();
    Polygon::new(vertices)
}

/// Read and parse a vertex file. Failures carry the path: I/O errors as `Io`, parse and
/// validation errors wrapped in `File`.
pub fn load_polygon(path: impl AsRef<Path>, max_vertices: usize) -> Result<Polygon, MedialError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MedialError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let polygon = parse_polygon(&text, max_vertices).map_err(|e| MedialError::File {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;
    debug!(path = %path.display(), vertices = polygon.len(), "loaded polygon");
    Ok(polygon)
}
