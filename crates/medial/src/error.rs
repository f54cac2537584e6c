//! Error type shared by the loader, polygon constructor, and triangulator.
//!
//! Every variant is terminal for the current run: no partially built polygon or
//! triangulation is ever returned alongside an error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the medial-axis pipeline.
#[derive(Debug, Error)]
pub enum MedialError {
    /// Fewer than 3 vertices, a non-finite coordinate, or consecutive duplicates.
    #[error("invalid polygon: {reason}")]
    InvalidPolygon { reason: String },

    /// Two input points coincide exactly (indices refer to the input order).
    #[error("duplicate vertex: points {first} and {second} coincide")]
    DuplicateVertex { first: usize, second: usize },

    /// No triangle can be formed from the input.
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: String },

    /// The vertex file declares more vertices than allowed.
    #[error("vertex count {declared} exceeds maximum {max}")]
    VertexCountExceeded { declared: usize, max: usize },

    /// The vertex file ended before the declared number of pairs was read.
    #[error("truncated input: declared {declared} vertices, found {found}")]
    TruncatedInput { declared: usize, found: usize },

    /// A token in the vertex file is not a number.
    #[error("malformed token {token:?} at position {position}")]
    MalformedToken { position: usize, token: String },

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A parse or validation failure attributed to a vertex file.
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<MedialError>,
    },
}

impl MedialError {
    pub(crate) fn invalid_polygon(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }

    /// The underlying condition, looking through `File` wrappers.
    pub fn root(&self) -> &MedialError {
        match self {
            Self::File { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_wrapper_reports_path_and_condition() {
        let err = MedialError::File {
            path: PathBuf::from("shapes/house"),
            source: Box::new(MedialError::TruncatedInput {
                declared: 5,
                found: 3,
            }),
        };
        let msg = err.to_string();
        assert!(msg.contains("shapes/house"));
        assert!(msg.contains("declared 5 vertices, found 3"));
        assert!(matches!(
            err.root(),
            MedialError::TruncatedInput {
                declared: 5,
                found: 3
            }
        ));
    }
}
