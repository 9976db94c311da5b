//! Questionnaire configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::{ConfigError, ValidationError};
use crate::domain::questionnaire::Questionnaire;

/// Optional replacement for the built-in questionnaire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionnaireConfig {
    /// YAML file with `dimensions: [{name, questions}]`
    pub path: Option<PathBuf>,
}

impl QuestionnaireConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if path.as_os_str().to_string_lossy().trim().is_empty() => {
                Err(ValidationError::BlankQuestionnairePath)
            }
            _ => Ok(()),
        }
    }

    /// Load the configured questionnaire, or the built-in one when no path is set
    pub fn load(&self) -> Result<Questionnaire, ConfigError> {
        let Some(path) = &self.path else {
            return Ok(Questionnaire::standard().clone());
        };

        let yaml = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::QuestionnaireUnreadable {
                path: path.clone(),
                reason: e.to_string(),
            }
        })?;
        Questionnaire::from_yaml_str(&yaml).map_err(|source| ConfigError::QuestionnaireInvalid {
            path: path.clone(),
            source,
        })
    }
}
