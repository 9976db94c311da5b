//! Maturity level value object (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AverageScore, ConfigError};

/// Digital maturity level: 1 (Initial) to 5 (Leading).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MaturityLevel {
    Initial = 1,
    Developing = 2,
    #[default]
    Established = 3,
    Advanced = 4,
    Leading = 5,
}

impl MaturityLevel {
    /// Lowest level on the scale.
    pub const MIN: u8 = 1;

    /// Highest level on the scale.
    pub const MAX: u8 = 5;

    /// Creates a MaturityLevel from an integer, returning error if out of range.
    pub fn try_from_level(value: i32) -> Result<Self, ConfigError> {
        match value {
            1 => Ok(MaturityLevel::Initial),
            2 => Ok(MaturityLevel::Developing),
            3 => Ok(MaturityLevel::Established),
            4 => Ok(MaturityLevel::Advanced),
            5 => Ok(MaturityLevel::Leading),
            _ => Err(ConfigError::UnknownLevel(value)),
        }
    }

    /// Returns the level nearest to a score, ties rounding up.
    ///
    /// A score of 2.5 maps to Established; 2.4 maps to Developing.
    pub fn nearest(score: AverageScore) -> Self {
        match (score.tenths() + 5) / 10 {
            0 | 1 => MaturityLevel::Initial,
            2 => MaturityLevel::Developing,
            3 => MaturityLevel::Established,
            4 => MaturityLevel::Advanced,
            _ => MaturityLevel::Leading,
        }
    }

    /// All levels in ascending order.
    pub fn all() -> [MaturityLevel; 5] {
        [
            MaturityLevel::Initial,
            MaturityLevel::Developing,
            MaturityLevel::Established,
            MaturityLevel::Advanced,
            MaturityLevel::Leading,
        ]
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            MaturityLevel::Initial => "Initial",
            MaturityLevel::Developing => "Developing",
            MaturityLevel::Established => "Established",
            MaturityLevel::Advanced => "Advanced",
            MaturityLevel::Leading => "Leading",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.value(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: f64) -> AverageScore {
        AverageScore::try_from(value).unwrap()
    }

    #[test]
    fn try_from_level_accepts_valid_values() {
        assert_eq!(MaturityLevel::try_from_level(1).unwrap(), MaturityLevel::Initial);
        assert_eq!(MaturityLevel::try_from_level(2).unwrap(), MaturityLevel::Developing);
        assert_eq!(MaturityLevel::try_from_level(3).unwrap(), MaturityLevel::Established);
        assert_eq!(MaturityLevel::try_from_level(4).unwrap(), MaturityLevel::Advanced);
        assert_eq!(MaturityLevel::try_from_level(5).unwrap(), MaturityLevel::Leading);
    }

    #[test]
    fn try_from_level_rejects_invalid_values() {
        assert_eq!(
            MaturityLevel::try_from_level(0),
            Err(ConfigError::UnknownLevel(0))
        );
        assert!(MaturityLevel::try_from_level(6).is_err());
        assert!(MaturityLevel::try_from_level(-1).is_err());
    }

    #[test]
    fn label_returns_display_text() {
        let labels: Vec<_> = MaturityLevel::all().iter().map(|l| l.label()).collect();
        assert_eq!(
            labels,
            vec!["Initial", "Developing", "Established", "Advanced", "Leading"]
        );
    }

    #[test]
    fn value_matches_scale_position() {
        for (index, level) in MaturityLevel::all().iter().enumerate() {
            assert_eq!(level.value() as usize, index + 1);
        }
    }

    #[test]
    fn nearest_rounds_to_closest_level() {
        assert_eq!(MaturityLevel::nearest(score(1.0)), MaturityLevel::Initial);
        assert_eq!(MaturityLevel::nearest(score(2.4)), MaturityLevel::Developing);
        assert_eq!(MaturityLevel::nearest(score(4.3)), MaturityLevel::Advanced);
        assert_eq!(MaturityLevel::nearest(score(4.6)), MaturityLevel::Leading);
        assert_eq!(MaturityLevel::nearest(score(5.0)), MaturityLevel::Leading);
    }

    #[test]
    fn nearest_rounds_ties_up() {
        assert_eq!(MaturityLevel::nearest(score(1.5)), MaturityLevel::Developing);
        assert_eq!(MaturityLevel::nearest(score(2.5)), MaturityLevel::Established);
        assert_eq!(MaturityLevel::nearest(score(4.5)), MaturityLevel::Leading);
    }

    #[test]
    fn default_is_established() {
        assert_eq!(MaturityLevel::default(), MaturityLevel::Established);
    }

    #[test]
    fn displays_value_and_label() {
        assert_eq!(format!("{}", MaturityLevel::Advanced), "4 - Advanced");
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&MaturityLevel::Leading).unwrap();
        assert_eq!(json, "\"Leading\"");
    }
}
