//! Timestamp value object for immutable points in time.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Format used for timestamps in the history log.
pub const HISTORY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Parses a timestamp written with [`HISTORY_TIMESTAMP_FORMAT`].
    pub fn parse_history(s: &str) -> Result<Self, ValidationError> {
        NaiveDateTime::parse_from_str(s.trim(), HISTORY_TIMESTAMP_FORMAT)
            .map(|naive| Self(naive.and_utc()))
            .map_err(|e| ValidationError::invalid_format("Timestamp", e.to_string()))
    }

    /// Drops the sub-second part, matching what the history log keeps.
    pub fn trunc_to_seconds(&self) -> Self {
        Self(self.0.trunc_subsecs(0))
    }

    /// Formats the timestamp for the history log (second precision).
    pub fn to_history_string(&self) -> String {
        self.0.format(HISTORY_TIMESTAMP_FORMAT).to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_history_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trunc_to_seconds_round_trips_through_history_format() {
        let ts = Timestamp::now().trunc_to_seconds();
        assert_eq!(Timestamp::parse_history(&ts.to_history_string()).unwrap(), ts);
    }
    use chrono::TimeZone;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn history_string_has_second_precision() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            Timestamp::from_datetime(dt).to_history_string(),
            "2024-03-09 14:05:07"
        );
    }

    #[test]
    fn parse_history_reads_written_format() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 0).unwrap();
        let ts = Timestamp::from_datetime(dt);

        let parsed = Timestamp::parse_history(&ts.to_history_string()).unwrap();

        assert_eq!(parsed, ts);
    }

    #[test]
    fn parse_history_rejects_other_formats() {
        let result = Timestamp::parse_history("31/12/2024");
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }
}
