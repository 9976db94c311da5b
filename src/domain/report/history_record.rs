//! History record - one saved assessment, flattened for the history log.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{AverageScore, Timestamp, ValidationError};
use crate::domain::scoring::{DimensionScore, Score};

pub const TIMESTAMP_COLUMN: &str = "Timestamp";
pub const USER_COLUMN: &str = "User";
pub const OVERALL_SCORE_COLUMN: &str = "Overall Score";
const SCORE_COLUMN_SUFFIX: &str = " Score";

/// History column holding the score of `dimension`.
pub fn score_column(dimension: &str) -> String {
    format!("{}{}", dimension, SCORE_COLUMN_SUFFIX)
}

/// User recorded when no identifier was entered.
pub const ANONYMOUS_USER: &str = "Anonymous";

/// Score of one dimension at the time of saving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedScore {
    pub dimension: String,
    pub score: AverageScore,
}

/// An immutable, append-only entry of the assessment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    timestamp: Timestamp,
    user: String,
    dimension_scores: Vec<RecordedScore>,
    overall_score: AverageScore,
}

impl HistoryRecord {
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn dimension_scores(&self) -> &[RecordedScore] {
        &self.dimension_scores
    }

    pub fn overall_score(&self) -> AverageScore {
        self.overall_score
    }

    /// Column names: Timestamp, User, `<Dimension> Score`..., Overall Score.
    pub fn column_names(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(self.dimension_scores.len() + 3);
        columns.push(TIMESTAMP_COLUMN.to_string());
        columns.push(USER_COLUMN.to_string());
        columns.extend(
            self.dimension_scores
                .iter()
                .map(|s| score_column(&s.dimension)),
        );
        columns.push(OVERALL_SCORE_COLUMN.to_string());
        columns
    }

    /// Field values in the same order as [`column_names`](Self::column_names).
    pub fn values(&self) -> Vec<String> {
        let mut values = Vec::with_capacity(self.dimension_scores.len() + 3);
        values.push(self.timestamp.to_history_string());
        values.push(self.user.clone());
        values.extend(self.dimension_scores.iter().map(|s| s.score.to_string()));
        values.push(self.overall_score.to_string());
        values
    }

    /// Rebuilds a record from a header row and a value row.
    ///
    /// Dimension columns are recognised by their `" Score"` suffix and keep
    /// the header's order.
    pub fn from_columns<H, V>(headers: &[H], values: &[V]) -> Result<Self, ValidationError>
    where
        H: AsRef<str>,
        V: AsRef<str>,
    {
        if headers.len() != values.len() {
            return Err(ValidationError::invalid_format(
                "history row",
                format!("expected {} fields, got {}", headers.len(), values.len()),
            ));
        }

        let mut seen = HashSet::new();
        let mut timestamp = None;
        let mut user = None;
        let mut overall_score = None;
        let mut dimension_scores = Vec::new();

        for (header, value) in headers.iter().zip(values) {
            let header = header.as_ref();
            let value = value.as_ref();
            if !seen.insert(header) {
                return Err(ValidationError::duplicate("column", header));
            }
            match header {
                TIMESTAMP_COLUMN => timestamp = Some(Timestamp::parse_history(value)?),
                USER_COLUMN => user = Some(normalize_user(Some(value))),
                OVERALL_SCORE_COLUMN => overall_score = Some(value.parse::<AverageScore>()?),
                other => {
                    let dimension = other.strip_suffix(SCORE_COLUMN_SUFFIX).ok_or_else(|| {
                        ValidationError::invalid_format("history header", format!("unexpected column '{}'", other))
                    })?;
                    dimension_scores.push(RecordedScore {
                        dimension: dimension.to_string(),
                        score: value.parse()?,
                    });
                }
            }
        }

        if dimension_scores.is_empty() {
            return Err(ValidationError::empty_field("dimension score columns"));
        }

        Ok(Self {
            timestamp: timestamp.ok_or_else(|| ValidationError::empty_field(TIMESTAMP_COLUMN))?,
            user: user.ok_or_else(|| ValidationError::empty_field(USER_COLUMN))?,
            dimension_scores,
            overall_score: overall_score
                .ok_or_else(|| ValidationError::empty_field(OVERALL_SCORE_COLUMN))?,
        })
    }
}

/// Trims the user identifier; blank or absent becomes "Anonymous".
pub fn normalize_user(user: Option<&str>) -> String {
    match user.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => ANONYMOUS_USER.to_string(),
    }
}

/// Flattens an assessment into a history record.
///
/// The timestamp is kept to the second, as written to the log.
pub fn build_history_record(
    timestamp: Timestamp,
    user: Option<&str>,
    dimension_scores: &[DimensionScore],
    overall: &Score,
) -> HistoryRecord {
    HistoryRecord {
        timestamp: timestamp.trunc_to_seconds(),
        user: normalize_user(user),
        dimension_scores: dimension_scores
            .iter()
            .map(|d| RecordedScore {
                dimension: d.dimension.clone(),
                score: d.score.average,
            })
            .collect(),
        overall_score: overall.average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn score(tenths: u16) -> Score {
        Score::from_average(AverageScore::from_tenths(tenths).unwrap())
    }

    fn fixed_time() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap())
    }

    fn sample_record(user: Option<&str>) -> HistoryRecord {
        let dimensions = vec![
            DimensionScore::new("People", score(35)),
            DimensionScore::new("Data", score(42)),
        ];
        build_history_record(fixed_time(), user, &dimensions, &score(39))
    }

    #[test]
    fn blank_user_becomes_anonymous() {
        assert_eq!(sample_record(Some("")).user(), ANONYMOUS_USER);
        assert_eq!(sample_record(Some("   ")).user(), ANONYMOUS_USER);
        assert_eq!(sample_record(None).user(), ANONYMOUS_USER);
    }

    #[test]
    fn user_is_trimmed() {
        assert_eq!(sample_record(Some("  Ada ")).user(), "Ada");
    }

    #[test]
    fn columns_follow_dimension_order() {
        assert_eq!(
            sample_record(None).column_names(),
            vec!["Timestamp", "User", "People Score", "Data Score", "Overall Score"]
        );
    }

    #[test]
    fn values_align_with_columns() {
        assert_eq!(
            sample_record(Some("Ada")).values(),
            vec!["2024-05-01 09:30:00", "Ada", "3.5", "4.2", "3.9"]
        );
    }

    #[test]
    fn from_columns_reads_back_written_row() {
        let record = sample_record(Some("Ada"));

        let parsed = HistoryRecord::from_columns(&record.column_names(), &record.values()).unwrap();

        assert_eq!(parsed, record);
    }

    #[test]
    fn from_columns_rejects_length_mismatch() {
        let result = HistoryRecord::from_columns(&["Timestamp", "User"], &["2024-05-01 09:30:00"]);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn from_columns_rejects_unknown_column() {
        let result = HistoryRecord::from_columns(
            &["Timestamp", "User", "Notes", "Overall Score"],
            &["2024-05-01 09:30:00", "Ada", "x", "3.0"],
        );
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn from_columns_requires_overall_score() {
        let result = HistoryRecord::from_columns(
            &["Timestamp", "User", "People Score"],
            &["2024-05-01 09:30:00", "Ada", "3.0"],
        );
        assert_eq!(result, Err(ValidationError::empty_field(OVERALL_SCORE_COLUMN)));
    }

    #[test]
    fn from_columns_rejects_duplicate_column() {
        let result = HistoryRecord::from_columns(
            &["Timestamp", "User", "People Score", "People Score", "Overall Score"],
            &["2024-05-01 09:30:00", "Ada", "3.0", "3.0", "3.0"],
        );
        assert_eq!(result, Err(ValidationError::duplicate("column", "People Score")));
    }
}
