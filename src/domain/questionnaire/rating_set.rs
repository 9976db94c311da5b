//! Rating set - the answers given for one questionnaire in one session.

use crate::domain::foundation::{ConfigError, DomainError, MaturityLevel, ValidationError};

use super::Questionnaire;

#[derive(Debug, Clone, PartialEq, Eq)]
struct DimensionRatings {
    name: String,
    questions: Vec<String>,
    levels: Vec<Option<MaturityLevel>>,
}

impl DimensionRatings {
    fn position(&self, question: &str) -> Result<usize, ConfigError> {
        self.questions
            .iter()
            .position(|q| q == question)
            .ok_or_else(|| ConfigError::UnknownQuestion {
                dimension: self.name.clone(),
                question: question.to_string(),
            })
    }
}

/// Ratings keyed by (dimension, question), ordered like the questionnaire
/// they were created from.
///
/// Scores are never stored here; they are recomputed from the current
/// ratings on every aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingSet {
    dimensions: Vec<DimensionRatings>,
}

impl RatingSet {
    /// Creates a rating set with no question rated yet.
    pub fn unrated(questionnaire: &Questionnaire) -> Self {
        Self::filled(questionnaire, None)
    }

    /// Creates a rating set with every question at the default level
    /// (Established), matching a freshly opened form.
    pub fn with_defaults(questionnaire: &Questionnaire) -> Self {
        Self::filled(questionnaire, Some(MaturityLevel::default()))
    }

    fn filled(questionnaire: &Questionnaire, level: Option<MaturityLevel>) -> Self {
        let dimensions = questionnaire
            .dimensions()
            .iter()
            .map(|d| DimensionRatings {
                name: d.name().to_string(),
                questions: d.questions().to_vec(),
                levels: vec![level; d.question_count()],
            })
            .collect();
        Self { dimensions }
    }

    fn entry(&self, dimension: &str) -> Result<&DimensionRatings, ConfigError> {
        self.dimensions
            .iter()
            .find(|d| d.name == dimension)
            .ok_or_else(|| ConfigError::UnknownDimension(dimension.to_string()))
    }

    fn entry_mut(&mut self, dimension: &str) -> Result<&mut DimensionRatings, ConfigError> {
        self.dimensions
            .iter_mut()
            .find(|d| d.name == dimension)
            .ok_or_else(|| ConfigError::UnknownDimension(dimension.to_string()))
    }

    /// Sets the rating of one question, replacing any previous rating.
    pub fn rate(
        &mut self,
        dimension: &str,
        question: &str,
        level: MaturityLevel,
    ) -> Result<(), ConfigError> {
        let entry = self.entry_mut(dimension)?;
        let index = entry.position(question)?;
        entry.levels[index] = Some(level);
        Ok(())
    }

    /// Sets every rating of a dimension at once, in question order.
    ///
    /// # Errors
    /// - Unknown dimension: `ConfigError::UnknownDimension`
    /// - Number of levels differs from the number of questions:
    ///   `ValidationError::OutOfRange`
    pub fn rate_dimension(
        &mut self,
        dimension: &str,
        levels: &[MaturityLevel],
    ) -> Result<(), DomainError> {
        let entry = self.entry_mut(dimension)?;
        if levels.len() != entry.questions.len() {
            let expected = entry.questions.len() as i32;
            return Err(ValidationError::out_of_range(
                format!("ratings for '{}'", dimension),
                expected,
                expected,
                levels.len() as i32,
            )
            .into());
        }
        entry.levels = levels.iter().copied().map(Some).collect();
        Ok(())
    }

    /// Returns the rating of one question, `None` if not yet rated.
    pub fn rating(&self, dimension: &str, question: &str) -> Result<Option<MaturityLevel>, ConfigError> {
        let entry = self.entry(dimension)?;
        let index = entry.position(question)?;
        Ok(entry.levels[index])
    }

    /// Returns every rating of a dimension in question order.
    ///
    /// Fails with `ValidationError::MissingRating` naming the first
    /// unrated question.
    pub fn levels_for(&self, dimension: &str) -> Result<Vec<MaturityLevel>, DomainError> {
        let entry = self.entry(dimension)?;
        entry
            .levels
            .iter()
            .zip(&entry.questions)
            .map(|(level, question)| {
                level.ok_or_else(|| {
                    DomainError::from(ValidationError::missing_rating(&entry.name, question))
                })
            })
            .collect()
    }

    /// Dimension names in questionnaire order.
    pub fn dimension_names(&self) -> impl Iterator<Item = &str> {
        self.dimensions.iter().map(|d| d.name.as_str())
    }

    pub fn dimension_count(&self) -> usize {
        self.dimensions.len()
    }

    /// True once every question of every dimension has a rating.
    pub fn is_complete(&self) -> bool {
        self.dimensions
            .iter()
            .all(|d| d.levels.iter().all(Option::is_some))
    }
}
