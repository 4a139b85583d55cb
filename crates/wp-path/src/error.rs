//! Path-subsystem error type.

use thiserror::Error;

/// Errors produced by `wp-path`.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("path has no points")]
    Empty,

    #[error("point index {index} out of range for path of {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("waypoint parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PathResult<T> = Result<T, PathError>;
