//! Score value types produced by aggregation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{AverageScore, MaturityLevel};

/// A rounded average together with the maturity level nearest to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub average: AverageScore,
    pub maturity: MaturityLevel,
}

impl Score {
    /// Derives the maturity level from the already-rounded average.
    pub fn from_average(average: AverageScore) -> Self {
        Self {
            average,
            maturity: MaturityLevel::nearest(average),
        }
    }

    /// Returns the maturity label ("Advanced", ...).
    pub fn label(&self) -> &'static str {
        self.maturity.label()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.average, self.maturity.label())
    }
}

/// The score of one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: String,
    pub score: Score,
}

impl DimensionScore {
    pub fn new(dimension: impl Into<String>, score: Score) -> Self {
        Self {
            dimension: dimension.into(),
            score,
        }
    }
}

/// Result of one full recomputation over a rating set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// One entry per dimension, in questionnaire order.
    pub dimensions: Vec<DimensionScore>,
    /// Mean of the dimension averages.
    pub overall: Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_average_derives_level() {
        let score = Score::from_average(AverageScore::from_tenths(43).unwrap());
        assert_eq!(score.maturity, MaturityLevel::Advanced);
        assert_eq!(score.label(), "Advanced");
    }

    #[test]
    fn displays_average_and_label() {
        let score = Score::from_average(AverageScore::from_tenths(30).unwrap());
        assert_eq!(score.to_string(), "3.0 (Established)");
    }
}
