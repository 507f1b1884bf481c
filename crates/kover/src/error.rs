//! Error types for Kover operations.

use std::io;

use thiserror::Error;

use kover_parser::error::ParseError;

/// The main error type for Kover operations.
///
/// The `Parse` variant keeps the scene source next to the parser error so
/// that diagnostics can show the offending lines.
#[derive(Debug, Error)]
pub enum KoverError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },
}

impl KoverError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
