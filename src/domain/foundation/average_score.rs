//! Average score value object (1.0 to 5.0, one decimal place).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A mean maturity rating rounded to one decimal place.
///
/// Stored as whole tenths so that rounding and comparisons are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AverageScore(u16);

impl AverageScore {
    /// Lowest possible score in tenths (1.0).
    pub const MIN_TENTHS: u16 = 10;

    /// Highest possible score in tenths (5.0).
    pub const MAX_TENTHS: u16 = 50;

    /// Creates a score from whole tenths, returning error if outside 1.0..=5.0.
    pub fn from_tenths(tenths: u16) -> Result<Self, ValidationError> {
        if !(Self::MIN_TENTHS..=Self::MAX_TENTHS).contains(&tenths) {
            return Err(ValidationError::out_of_range(
                "average_score_tenths",
                i32::from(Self::MIN_TENTHS),
                i32::from(Self::MAX_TENTHS),
                i32::from(tenths),
            ));
        }
        Ok(Self(tenths))
    }

    /// Mean of `count` values whose sum is `total_tenths`, rounded half up
    /// to the nearest tenth.
    ///
    /// # Errors
    /// - `count == 0`: `ValidationError::EmptyField`
    /// - mean outside 1.0..=5.0: `ValidationError::OutOfRange`
    pub fn mean(total_tenths: u64, count: usize) -> Result<Self, ValidationError> {
        if count == 0 {
            return Err(ValidationError::empty_field("ratings"));
        }
        let count = count as u64;
        let rounded = (2 * total_tenths + count) / (2 * count);
        let tenths = u16::try_from(rounded).map_err(|_| {
            ValidationError::out_of_range(
                "average_score_tenths",
                i32::from(Self::MIN_TENTHS),
                i32::from(Self::MAX_TENTHS),
                i32::MAX,
            )
        })?;
        Self::from_tenths(tenths)
    }

    /// Returns the score in whole tenths (4.3 -> 43).
    pub fn tenths(&self) -> u16 {
        self.0
    }

    /// Returns the score as a float.
    pub fn value(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl TryFrom<f64> for AverageScore {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "average_score",
                "not a finite number",
            ));
        }
        let tenths = (value * 10.0).round();
        if tenths < f64::from(Self::MIN_TENTHS) || tenths > f64::from(Self::MAX_TENTHS) {
            return Err(ValidationError::out_of_range(
                "average_score_tenths",
                i32::from(Self::MIN_TENTHS),
                i32::from(Self::MAX_TENTHS),
                tenths as i32,
            ));
        }
        Ok(Self(tenths as u16))
    }
}

impl From<AverageScore> for f64 {
    fn from(score: AverageScore) -> Self {
        score.value()
    }
}

impl FromStr for AverageScore {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::invalid_format("average_score", format!("'{}' is not a number", s)))?;
        Self::try_from(value)
    }
}

impl fmt::Display for AverageScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}
