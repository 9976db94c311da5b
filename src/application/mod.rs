//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Scoring is a pure recomputation; history handlers go through the
//! `HistoryStore` port.

pub mod handlers;

pub use handlers::assessment::{
    AssessRatingsCommand, AssessRatingsHandler, AssessRatingsResult, ExportHistoryHandler,
    ExportReportHandler, ListHistoryHandler, RenderRadarHandler, SaveHistoryCommand,
    SaveHistoryHandler, SaveHistoryResult,
};
