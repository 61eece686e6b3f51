//! Error types for routing and self-test sessions.
//!
//! Dataset and config loading report failures through `anyhow` with file
//! context. The errors here are the ones callers match on.

use thiserror::Error;

/// Errors produced while parsing a navigable path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The first path segment names no known view.
    #[error("unknown view: {0}")]
    UnknownView(String),

    /// A palace view was addressed without a palace segment.
    #[error("missing palace name in path: {0}")]
    MissingPalace(String),

    /// The palace segment is not valid percent-encoded UTF-8.
    #[error("invalid escaping in palace segment {segment:?}: {reason}")]
    InvalidEscape { segment: String, reason: String },
}

/// Errors produced by self-test session operations.
///
/// These signal a caller passing indices outside the loaded palace. The
/// session itself has no failing inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("hexagram index {index} out of range (palace has {len})")]
    HexagramOutOfRange { index: usize, len: usize },

    #[error("line index {index} out of range for hexagram {hexagram} (has {len} lines)")]
    LineOutOfRange {
        hexagram: usize,
        index: usize,
        len: usize,
    },
}
