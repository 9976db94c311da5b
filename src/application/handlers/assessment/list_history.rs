//! History queries - listing saved assessments and exporting the log.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::report::HistoryRecord;
use crate::ports::{ExportFormat, ExportedDocument, HistoryStore, HISTORY_FILE_STEM};

/// Handler returning every saved assessment in the order saved.
pub struct ListHistoryHandler {
    store: Arc<dyn HistoryStore>,
}

impl ListHistoryHandler {
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<HistoryRecord>, DomainError> {
        self.store.read_all().await.map_err(|e| {
            error!(error = %e, "Failed to read history");
            DomainError::from(e)
        })
    }
}

/// Handler producing the history log as a CSV download.
pub struct ExportHistoryHandler {
    store: Arc<dyn HistoryStore>,
}

impl ExportHistoryHandler {
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self { store }
    }

    /// # Errors
    /// `NotFound` when nothing has been saved yet.
    pub async fn handle(&self) -> Result<ExportedDocument, DomainError> {
        let content = self
            .store
            .export()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to export history");
                DomainError::from(e)
            })?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::NotFound, "No assessments have been saved yet")
            })?;

        info!(bytes = content.len(), "Exported history");
        Ok(ExportedDocument::new(
            content,
            ExportFormat::Csv,
            HISTORY_FILE_STEM,
        ))
    }
}
