//! AssessRatingsHandler - Recomputes all scores from submitted ratings.
//!
//! Every request carries the complete form state; nothing is kept between
//! calls. Dimensions the caller leaves out keep the default level.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{DomainError, MaturityLevel};
use crate::domain::questionnaire::{Questionnaire, RatingSet};
use crate::domain::scoring::{Assessment, ScoreAggregator};

/// Command carrying raw ratings, one level per question in question order.
#[derive(Debug, Clone, Default)]
pub struct AssessRatingsCommand {
    pub ratings: BTreeMap<String, Vec<i32>>,
}

impl AssessRatingsCommand {
    pub fn new(ratings: BTreeMap<String, Vec<i32>>) -> Self {
        Self { ratings }
    }
}

/// Result of a successful assessment.
pub type AssessRatingsResult = Assessment;

/// Handler turning submitted ratings into dimension and overall scores.
pub struct AssessRatingsHandler {
    questionnaire: Arc<Questionnaire>,
}

impl AssessRatingsHandler {
    pub fn new(questionnaire: Arc<Questionnaire>) -> Self {
        Self { questionnaire }
    }

    /// Builds the rating set for the command.
    ///
    /// # Errors
    /// - `UnknownLevel` for a level outside 1 to 5
    /// - `UnknownDimension` for a dimension not in the questionnaire
    /// - `OutOfRange` when a dimension's level count differs from its questions
    pub fn rating_set(&self, command: &AssessRatingsCommand) -> Result<RatingSet, DomainError> {
        let mut rating_set = RatingSet::with_defaults(&self.questionnaire);
        for (dimension, raw_levels) in &command.ratings {
            let levels = raw_levels
                .iter()
                .map(|level| MaturityLevel::try_from_level(*level))
                .collect::<Result<Vec<_>, _>>()?;
            rating_set.rate_dimension(dimension, &levels)?;
        }
        Ok(rating_set)
    }

    pub fn handle(&self, command: AssessRatingsCommand) -> Result<AssessRatingsResult, DomainError> {
        let rating_set = self.rating_set(&command)?;
        let assessment = ScoreAggregator::assess(&rating_set)?;

        debug!(
            rated_dimensions = command.ratings.len(),
            overall = %assessment.overall,
            "Recomputed assessment"
        );
        Ok(assessment)
    }
}
