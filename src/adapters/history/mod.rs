//! History Store Adapters
//!
//! Implementations of the HistoryStore port.
//!
//! ## Available Adapters
//!
//! - **CsvHistoryStore** - Appends records to a CSV file on disk
//! - **InMemoryHistoryStore** - Keeps records in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::history::{CsvHistoryStore, InMemoryHistoryStore};
//!
//! // Production: file-based log
//! let store = CsvHistoryStore::new("dma_history.csv");
//!
//! // Testing: in-memory log
//! let store = InMemoryHistoryStore::new();
//! ```

mod csv_codec;
mod csv_history_store;
mod in_memory_history_store;

pub use csv_history_store::CsvHistoryStore;
pub use in_memory_history_store::InMemoryHistoryStore;
