//! Serializable results of a checking run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CheckerError, Result};
use crate::spellcheck::CorrectionMap;

/// Result of checking a single input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub token_count: usize,
    /// Every misspelled occurrence, in reading order.
    pub misspelled: Vec<String>,
    pub corrections: CorrectionMap,
}

/// An input file that could not be checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    pub dictionary: PathBuf,
    pub threshold: usize,
    pub files: Vec<FileReport>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FileFailure>,
}

impl CheckReport {
    pub fn new(dictionary: impl Into<PathBuf>, threshold: usize) -> Self {
        CheckReport {
            dictionary: dictionary.into(),
            threshold,
            files: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn push_file(&mut self, report: FileReport) {
        self.files.push(report);
    }

    pub fn push_failure(&mut self, path: impl Into<PathBuf>, error: &CheckerError) {
        self.failures.push(FileFailure {
            path: path.into(),
            error: error.to_string(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Total misspelled occurrences across all checked files.
    pub fn misspelled_count(&self) -> usize {
        self.files.iter().map(|f| f.misspelled.len()).sum()
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
