//! Scoring Module - Pure aggregation of ratings into maturity scores.
//!
//! # Components
//!
//! - `ScoreAggregator` - dimension averages and the overall mean of means
//! - `Score`, `DimensionScore`, `Assessment` - aggregation results

mod score;
mod score_aggregator;

pub use score::{Assessment, DimensionScore, Score};
pub use score_aggregator::ScoreAggregator;
