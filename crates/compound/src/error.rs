//! Library error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a word list.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {path} is not valid UTF-8 (at byte {valid_up_to})")]
    InvalidUtf8 { path: PathBuf, valid_up_to: usize },
}

/// Failure to build a `CompoundPattern`.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("dictionary pattern exceeds the regex size limit ({entries} entries)")]
    TooLarge { entries: usize },

    #[error("invalid dictionary pattern: {0}")]
    Regex(#[from] regex::Error),
}
