//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need to surface it.

use thiserror::Error;

/// The base error type for `wp-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `wp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
