//! Runtime configuration for a checking run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CheckerError, Result};

/// Maximum edit distance accepted as a suggestion when nothing else is configured.
pub const DEFAULT_THRESHOLD: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckerConfig {
    /// Maximum edit distance accepted as a suggestion.
    pub threshold: usize,
    /// Spread the suggestion search across the rayon thread pool.
    pub parallel: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            parallel: true,
        }
    }
}

impl CheckerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file. Missing keys fall back to their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CheckerError::Config(format!("unable to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| CheckerError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CheckerConfig::default();
        assert_eq!(config.threshold, 1);
        assert!(config.parallel);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CheckerConfig::from_json_str(r#"{"threshold": 2}"#).unwrap();
        assert_eq!(config.threshold, 2);
        assert!(config.parallel);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CheckerConfig::from_json_str(r#"{"treshold": 2}"#).unwrap_err();
        assert!(matches!(err, CheckerError::Serialization(_)));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        assert!(CheckerConfig::from_json_str(r#"{"threshold": -1}"#).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = CheckerConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CheckerError::Config(_)));
    }

    #[test]
    fn test_invalid_file_error_names_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"threshold": "two"}"#).unwrap();

        match CheckerConfig::from_json_file(&path).unwrap_err() {
            CheckerError::Config(message) => {
                assert!(message.contains(&path.display().to_string()), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_builders() {
        let config = CheckerConfig::default()
            .with_threshold(3)
            .with_parallel(false);
        assert_eq!(
            config,
            CheckerConfig {
                threshold: 3,
                parallel: false
            }
        );
    }
}
