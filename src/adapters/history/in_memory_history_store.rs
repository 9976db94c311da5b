//! In-Memory History Store Adapter
//!
//! Keeps saved assessments in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::csv_codec;
use crate::domain::report::HistoryRecord;
use crate::ports::{HistoryStore, HistoryStoreError};

/// In-memory append-only history log
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStore {
    records: Arc<RwLock<Vec<HistoryRecord>>>,
}

impl InMemoryHistoryStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored records
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn append(&self, record: &HistoryRecord) -> Result<(), HistoryStoreError> {
        let mut records = self.records.write().await;
        if let Some(first) = records.first() {
            let expected = first.column_names();
            let found = record.column_names();
            if expected != found {
                return Err(HistoryStoreError::SchemaMismatch { expected, found });
            }
        }
        records.push(record.clone());
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<HistoryRecord>, HistoryStoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn export(&self) -> Result<Option<Vec<u8>>, HistoryStoreError> {
        let records = self.records.read().await;
        if records.is_empty() {
            return Ok(None);
        }
        csv_codec::encode(&records, true).map(Some)
    }
}
