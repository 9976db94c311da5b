//! SaveHistoryHandler - Appends an assessment to the history log.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::report::{HistoryRecord, ReportFormatter};
use crate::domain::scoring::Assessment;
use crate::ports::HistoryStore;

/// Command to save one assessment.
#[derive(Debug, Clone)]
pub struct SaveHistoryCommand {
    pub assessment: Assessment,
    /// Free-text identifier; blank or absent is recorded as "Anonymous".
    pub user: Option<String>,
}

/// Result of a successful save: the record as appended.
pub type SaveHistoryResult = HistoryRecord;

pub struct SaveHistoryHandler {
    store: Arc<dyn HistoryStore>,
}

impl SaveHistoryHandler {
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SaveHistoryCommand) -> Result<SaveHistoryResult, DomainError> {
        let record = ReportFormatter::build_history_record(
            Timestamp::now(),
            command.user.as_deref(),
            &command.assessment.dimensions,
            &command.assessment.overall,
        );

        self.store.append(&record).await.map_err(|e| {
            error!(error = %e, "Failed to append assessment to history");
            DomainError::from(e)
        })?;

        info!(
            user = record.user(),
            overall = %record.overall_score(),
            "Saved assessment"
        );
        Ok(record)
    }
}
