//! Questionnaire Module - What is asked and what was answered.
//!
//! - `Questionnaire` / `Dimension` - static question catalogue
//! - `RatingSet` - one session's answers, passed explicitly to scoring

mod definition;
mod rating_set;

pub use definition::{Dimension, Questionnaire, QuestionnaireBuilder};
pub use rating_set::RatingSet;
