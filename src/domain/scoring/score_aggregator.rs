//! Score Aggregator - Averages ratings into dimension and overall scores.

use crate::domain::foundation::{AverageScore, DomainError, MaturityLevel, ValidationError};
use crate::domain::questionnaire::RatingSet;

use super::{Assessment, DimensionScore, Score};

/// Stateless aggregation of maturity ratings.
///
/// Averages are rounded half up to one decimal place. The overall score is
/// the mean of the rounded dimension averages, not of the raw ratings, so
/// dimensions weigh equally regardless of how many questions they hold.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Averages the ratings of one dimension.
    ///
    /// # Errors
    /// Returns `ValidationError::EmptyField` when `ratings` is empty.
    pub fn aggregate_dimension(ratings: &[MaturityLevel]) -> Result<Score, ValidationError> {
        if ratings.is_empty() {
            return Err(ValidationError::empty_field("ratings"));
        }
        let total_tenths: u64 = ratings.iter().map(|r| u64::from(r.value()) * 10).sum();
        let average = AverageScore::mean(total_tenths, ratings.len())?;
        Ok(Score::from_average(average))
    }

    /// Averages already-rounded dimension scores into the overall score.
    ///
    /// # Errors
    /// Returns `ValidationError::EmptyField` when `dimension_scores` is empty.
    pub fn aggregate_overall(dimension_scores: &[DimensionScore]) -> Result<Score, ValidationError> {
        if dimension_scores.is_empty() {
            return Err(ValidationError::empty_field("dimension_scores"));
        }
        let total_tenths: u64 = dimension_scores
            .iter()
            .map(|d| u64::from(d.score.average.tenths()))
            .sum();
        let average = AverageScore::mean(total_tenths, dimension_scores.len())?;
        Ok(Score::from_average(average))
    }

    /// Recomputes every dimension score and the overall score.
    ///
    /// # Errors
    /// Fails with a `MissingRating` error if any question is unrated.
    pub fn assess(ratings: &RatingSet) -> Result<Assessment, DomainError> {
        let dimensions = ratings
            .dimension_names()
            .map(|name| -> Result<DimensionScore, DomainError> {
                let levels = ratings.levels_for(name)?;
                let score = Self::aggregate_dimension(&levels)?;
                Ok(DimensionScore::new(name, score))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let overall = Self::aggregate_overall(&dimensions)?;

        Ok(Assessment { dimensions, overall })
    }
}
