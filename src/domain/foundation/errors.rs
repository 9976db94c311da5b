//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised when input data does not satisfy a domain rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("No rating given for '{question}' in dimension '{dimension}'")]
    MissingRating { dimension: String, question: String },

    #[error("Duplicate {kind} '{name}'")]
    Duplicate { kind: String, name: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a missing rating validation error.
    pub fn missing_rating(dimension: impl Into<String>, question: impl Into<String>) -> Self {
        ValidationError::MissingRating {
            dimension: dimension.into(),
            question: question.into(),
        }
    }

    /// Creates a duplicate entry validation error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

/// Errors in the static scale or questionnaire lookup.
///
/// These point at a mismatch between what a caller asked for and the
/// questionnaire actually loaded, not at a user-correctable value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown maturity level {0}; expected 1 to 5")]
    UnknownLevel(i32),

    #[error("Unknown dimension '{0}'")]
    UnknownDimension(String),

    #[error("Unknown question '{question}' in dimension '{dimension}'")]
    UnknownQuestion { dimension: String, question: String },
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    OutOfRange,
    InvalidFormat,
    MissingRating,
    Duplicate,

    // Configuration errors
    UnknownLevel,
    UnknownDimension,
    UnknownQuestion,

    // Lookup errors
    NotFound,

    // Infrastructure errors
    StorageError,
    ExportError,
}

impl ErrorCode {
    /// Returns true for errors caused by the request content.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorCode::StorageError | ErrorCode::ExportError)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::MissingRating => "MISSING_RATING",
            ErrorCode::Duplicate => "DUPLICATE",
            ErrorCode::UnknownLevel => "UNKNOWN_LEVEL",
            ErrorCode::UnknownDimension => "UNKNOWN_DIMENSION",
            ErrorCode::UnknownQuestion => "UNKNOWN_QUESTION",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::ExportError => "EXPORT_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::MissingRating { .. } => ErrorCode::MissingRating,
            ValidationError::Duplicate { .. } => ErrorCode::Duplicate,
        };
        DomainError::new(code, err.to_string())
    }
}

impl From<ConfigError> for DomainError {
    fn from(err: ConfigError) -> Self {
        match &err {
            ConfigError::UnknownLevel(level) => {
                DomainError::new(ErrorCode::UnknownLevel, err.to_string())
                    .with_detail("level", level.to_string())
            }
            ConfigError::UnknownDimension(dimension) => {
                DomainError::new(ErrorCode::UnknownDimension, err.to_string())
                    .with_detail("dimension", dimension.clone())
            }
            ConfigError::UnknownQuestion { dimension, question } => {
                DomainError::new(ErrorCode::UnknownQuestion, err.to_string())
                    .with_detail("dimension", dimension.clone())
                    .with_detail("question", question.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("ratings");
        assert_eq!(format!("{}", err), "Field 'ratings' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("level", 1, 5, 7);
        assert_eq!(
            format!("{}", err),
            "Field 'level' must be between 1 and 5, got 7"
        );
    }

    #[test]
    fn validation_error_missing_rating_names_question() {
        let err = ValidationError::missing_rating("Data", "AI/ML readiness");
        assert_eq!(
            format!("{}", err),
            "No rating given for 'AI/ML readiness' in dimension 'Data'"
        );
    }

    #[test]
    fn config_error_unknown_level_displays_correctly() {
        assert_eq!(
            format!("{}", ConfigError::UnknownLevel(0)),
            "Unknown maturity level 0; expected 1 to 5"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::StorageError, "disk full");
        assert_eq!(format!("{}", err), "[STORAGE_ERROR] disk full");
    }

    #[test]
    fn domain_error_from_validation_keeps_code() {
        let err: DomainError = ValidationError::empty_field("ratings").into();
        assert_eq!(err.code, ErrorCode::EmptyField);
        assert!(err.code.is_client_error());
    }

    #[test]
    fn domain_error_from_config_adds_details() {
        let err: DomainError = ConfigError::UnknownDimension("Culture".to_string()).into();
        assert_eq!(err.code, ErrorCode::UnknownDimension);
        assert_eq!(err.details.get("dimension"), Some(&"Culture".to_string()));
    }

    #[test]
    fn infrastructure_codes_are_not_client_errors() {
        assert!(!ErrorCode::StorageError.is_client_error());
        assert!(!ErrorCode::ExportError.is_client_error());
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::MissingRating), "MISSING_RATING");
        assert_eq!(format!("{}", ErrorCode::NotFound), "NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::ExportError), "EXPORT_ERROR");
    }
}
