//! Configuration types for the quicksort visualizer.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::playback::MIN_DELAY_MS;

fn default_delay_ms() -> u64 {
    300
}

/// Top-level visualizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizerConfig {
    /// Number of bars in the sequence.
    pub bar_count: usize,
    /// Smallest bar height (inclusive).
    pub min_value: u32,
    /// Largest bar height (exclusive).
    pub max_value: u32,
    /// Delay between playback advances, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Fixed RNG seed for reproducible sequences (None = entropy).
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            bar_count: 40,
            min_value: 40,
            max_value: 400,
            delay_ms: default_delay_ms(),
            seed: None,
        }
    }
}

impl VisualizerConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bar_count == 0 {
            return Err(ConfigError::InvalidBarCount);
        }
        if self.min_value == 0 || self.min_value >= self.max_value {
            return Err(ConfigError::InvalidValueRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.delay_ms < MIN_DELAY_MS {
            return Err(ConfigError::InvalidDelay {
                delay_ms: self.delay_ms,
                min: MIN_DELAY_MS,
            });
        }
        Ok(())
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Bar count must be non-zero")]
    InvalidBarCount,
    #[error("Value range [{min}, {max}) must be non-empty and start above zero")]
    InvalidValueRange { min: u32, max: u32 },
    #[error("Delay of {delay_ms}ms is below the {min}ms minimum")]
    InvalidDelay { delay_ms: u64, min: u64 },
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_valid() {
        let config = VisualizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bar_count, 40);
        assert_eq!(config.delay_ms, 300);
    }

    #[test]
    fn test_rejects_zero_bars() {
        let config = VisualizerConfig {
            bar_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBarCount)
        ));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = VisualizerConfig {
            min_value: 50,
            max_value: 50,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValueRange { min: 50, max: 50 })
        ));
    }

    #[test]
    fn test_rejects_tiny_delay() {
        let config = VisualizerConfig {
            delay_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDelay { delay_ms: 0, .. })
        ));
    }

    #[test]
    fn test_from_file_applies_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "bar_count": 12, "min_value": 10, "max_value": 100 }}"#
        )
        .unwrap();

        let config = VisualizerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.bar_count, 12);
        assert_eq!(config.delay_ms, 300);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_from_file_reports_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = VisualizerConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = VisualizerConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
