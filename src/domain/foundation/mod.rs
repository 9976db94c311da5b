//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of
//! the assessment domain.

mod average_score;
mod errors;
mod maturity_level;
mod timestamp;

pub use average_score::AverageScore;
pub use errors::{ConfigError, DomainError, ErrorCode, ValidationError};
pub use maturity_level::MaturityLevel;
pub use timestamp::{Timestamp, HISTORY_TIMESTAMP_FORMAT};
