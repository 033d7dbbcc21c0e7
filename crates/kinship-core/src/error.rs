//! Error types for input parsing.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Everything that can go wrong reading a roster or friendship file.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("missing the leading entry count")]
    MissingCount,

    #[error("expected a non-negative integer at token {position}, found '{token}'")]
    InvalidNumber { token: String, position: usize },

    #[error("incomplete entry at token {position}: expected a pair of values")]
    IncompleteEntry { position: usize },

    #[error("specified {what} count ({declared}) does not match the {found} entries in the file")]
    CountMismatch {
        what: &'static str,
        declared: usize,
        found: usize,
    },
}

impl ParseError {
    /// Wraps an I/O error with the path that caused it.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
