//! History Store Port - Interface for the append-only assessment log.
//!
//! This port defines how saved assessments are appended and read back,
//! supporting both file-based and in-memory storage.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::report::HistoryRecord;

/// Errors that can occur during history storage operations
#[derive(Debug, thiserror::Error)]
pub enum HistoryStoreError {
    #[error("Record columns {found:?} do not match stored columns {expected:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("Failed to read stored record {line}: {source}")]
    CorruptRecord {
        line: u64,
        #[source]
        source: ValidationError,
    },

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<HistoryStoreError> for DomainError {
    fn from(err: HistoryStoreError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for appending to and reading the assessment history
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append one record after all previously appended ones.
    ///
    /// Creates the underlying storage on first use. Never modifies or
    /// removes existing records.
    ///
    /// # Errors
    /// Returns `HistoryStoreError` if the append fails
    async fn append(&self, record: &HistoryRecord) -> Result<(), HistoryStoreError>;

    /// Read every record in append order
    ///
    /// # Returns
    /// An empty list when nothing has been stored yet
    async fn read_all(&self) -> Result<Vec<HistoryRecord>, HistoryStoreError>;

    /// Export the full history as CSV bytes for download
    ///
    /// # Returns
    /// `None` when nothing has been stored yet
    async fn export(&self) -> Result<Option<Vec<u8>>, HistoryStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_mismatch_lists_both_headers() {
        let err = HistoryStoreError::SchemaMismatch {
            expected: vec!["Timestamp".to_string()],
            found: vec!["User".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("Timestamp"));
        assert!(message.contains("User"));
    }

    #[test]
    fn converts_to_storage_domain_error() {
        let err: DomainError = HistoryStoreError::IoError("disk full".to_string()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(!err.code.is_client_error());
    }

    #[test]
    fn corrupt_record_names_line() {
        let err = HistoryStoreError::CorruptRecord {
            line: 3,
            source: ValidationError::empty_field("User"),
        };
        assert!(err.to_string().contains("record 3"));
    }
}
