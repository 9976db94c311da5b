//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Failed to read questionnaire file {}: {reason}", path.display())]
    QuestionnaireUnreadable { path: PathBuf, reason: String },

    #[error("Invalid questionnaire file {}: {source}", path.display())]
    QuestionnaireInvalid {
        path: PathBuf,
        #[source]
        source: crate::domain::foundation::ValidationError,
    },
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddress(String),

    #[error("History path must not be blank")]
    BlankHistoryPath,

    #[error("Questionnaire path must not be blank")]
    BlankQuestionnairePath,
}
