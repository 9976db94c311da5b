//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `questionnaire` - Maturity questionnaire and session ratings
//! - `scoring` - Pure aggregation of ratings into scores
//! - `report` - Summary table, history record and radar chart shaping

pub mod foundation;
pub mod questionnaire;
pub mod report;
pub mod scoring;
