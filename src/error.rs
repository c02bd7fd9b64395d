//! Error types for the checker.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using the checker's error type.
pub type Result<T> = std::result::Result<T, CheckerError>;

/// Everything that can go wrong while checking files.
#[derive(Error, Debug)]
pub enum CheckerError {
    /// The dictionary could not be opened or read. Fatal to the whole run.
    #[error("dictionary unavailable: {}: {source}", path.display())]
    DictionaryUnavailable { path: PathBuf, source: io::Error },

    /// An input file could not be opened or read. Fatal for that file only.
    #[error("input unavailable: {}: {source}", path.display())]
    InputUnavailable { path: PathBuf, source: io::Error },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CheckerError {
    /// Path of the file the error is about, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            CheckerError::DictionaryUnavailable { path, .. }
            | CheckerError::InputUnavailable { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}
