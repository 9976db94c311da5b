//! History storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where saved assessments are appended
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// CSV file holding the assessment history
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.history_path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(ValidationError::BlankHistoryPath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
        }
    }
}

fn default_history_path() -> PathBuf {
    PathBuf::from("dma_history.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.history_path, PathBuf::from("dma_history.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_history_path_is_invalid() {
        let config = StorageConfig {
            history_path: PathBuf::from("  "),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::BlankHistoryPath)
        ));
    }
}
