//! Digital Maturity Assessment
//!
//! Rates an organisation on a fixed 1-5 maturity scale across several
//! dimensions, aggregates the ratings into per-dimension and overall scores,
//! and produces a summary table, a radar chart, a PDF report and an
//! append-only CSV history of saved assessments.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
