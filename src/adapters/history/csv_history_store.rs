//! CSV file History Store Adapter
//!
//! Appends each saved assessment as one line of a CSV file. The header row
//! is written together with the first record. Appends through one store
//! (and its clones) are serialized so the header is written exactly once.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::csv_codec;
use crate::domain::report::HistoryRecord;
use crate::ports::{HistoryStore, HistoryStoreError};

/// File-based append-only history log
#[derive(Debug, Clone)]
pub struct CsvHistoryStore {
    path: PathBuf,
    /// Held from the header check until the record is written.
    write_lock: Arc<Mutex<()>>,
}

impl CsvHistoryStore {
    /// Create a store writing to `path`
    ///
    /// The file and its parent directories are created on first append.
    ///
    /// # Example
    /// ```ignore
    /// let store = CsvHistoryStore::new("dma_history.csv");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the header row of the existing file, if any
    async fn existing_header(&self) -> Result<Option<Vec<String>>, HistoryStoreError> {
        let file = match fs::File::open(&self.path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(HistoryStoreError::IoError(e.to_string())),
        };

        let mut lines = BufReader::new(file).lines();
        match lines
            .next_line()
            .await
            .map_err(|e| HistoryStoreError::IoError(e.to_string()))?
        {
            Some(line) => csv_codec::decode_header(line.as_bytes()),
            None => Ok(None),
        }
    }

    /// Ensure the parent directory exists
    async fn ensure_parent_dir(&self) -> Result<(), HistoryStoreError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| HistoryStoreError::IoError(e.to_string())),
            _ => Ok(()),
        }
    }

    /// Read the raw file, `None` when it does not exist
    async fn read_bytes(&self) -> Result<Option<Vec<u8>>, HistoryStoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HistoryStoreError::IoError(e.to_string())),
        }
    }
}

#[async_trait]
impl HistoryStore for CsvHistoryStore {
    async fn append(&self, record: &HistoryRecord) -> Result<(), HistoryStoreError> {
        let columns = record.column_names();
        let _guard = self.write_lock.lock().await;
        let include_header = match self.existing_header().await? {
            None => true,
            Some(expected) if expected == columns => false,
            Some(expected) => {
                return Err(HistoryStoreError::SchemaMismatch {
                    expected,
                    found: columns,
                })
            }
        };

        self.ensure_parent_dir().await?;
        let bytes = csv_codec::encode(std::slice::from_ref(record), include_header)?;

        // One write in append mode per record; existing lines are never rewritten.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| HistoryStoreError::IoError(e.to_string()))?;
        file.write_all(&bytes)
            .await
            .map_err(|e| HistoryStoreError::IoError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| HistoryStoreError::IoError(e.to_string()))?;

        info!(
            path = %self.path.display(),
            user = record.user(),
            created = include_header,
            "Appended assessment to history"
        );
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<HistoryRecord>, HistoryStoreError> {
        match self.read_bytes().await? {
            Some(bytes) => {
                let records = csv_codec::decode(&bytes)?;
                debug!(path = %self.path.display(), count = records.len(), "Read history");
                Ok(records)
            }
            None => Ok(Vec::new()),
        }
    }

    async fn export(&self) -> Result<Option<Vec<u8>>, HistoryStoreError> {
        Ok(self.read_bytes().await?.filter(|bytes| !bytes.is_empty()))
    }
}
