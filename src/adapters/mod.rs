//! Adapters - Implementations of the ports.
//!
//! - `history` - CSV file and in-memory history stores
//! - `pdf` - PDF report exporter
//! - `chart` - SVG radar chart renderer
//! - `http` - axum REST API

pub mod chart;
pub mod history;
pub mod http;
pub mod pdf;
