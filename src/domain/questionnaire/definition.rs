//! Questionnaire definition - dimensions and their ordered questions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{ConfigError, ValidationError};
use crate::domain::report::{score_column, OVERALL_SCORE_COLUMN};

/// The Digital Maturity Assessment questionnaire: four dimensions of six
/// questions each.
static STANDARD: Lazy<Questionnaire> = Lazy::new(|| Questionnaire {
    dimensions: vec![
        Dimension::new(
            "People",
            [
                "Leadership awareness and commitment",
                "Digital skills and competencies",
                "Change readiness and innovation mindset",
                "Training and development programs",
                "Digital champions/ambassadors",
                "Organizational alignment with digital goals",
            ],
        ),
        Dimension::new(
            "Process",
            [
                "Degree of process digitization",
                "Process standardization and documentation",
                "Agility and responsiveness",
                "Integration of digital tools in workflows",
                "Use of KPIs and metrics",
                "Governance and compliance",
            ],
        ),
        Dimension::new(
            "Technology",
            [
                "IT infrastructure maturity",
                "Adoption of digital tools (ERP, CRM, etc.)",
                "System integration and interoperability",
                "Cybersecurity readiness",
                "Cloud adoption and flexibility",
                "Availability of AI/analytics tools",
            ],
        ),
        Dimension::new(
            "Data",
            [
                "Data availability and accessibility",
                "Data quality and consistency",
                "Data-driven decision making",
                "Data governance policies",
                "Reporting and analytics capabilities",
                "AI/ML readiness",
            ],
        ),
    ],
});

/// A named group of questions rated on the same scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    name: String,
    questions: Vec<String>,
}

impl Dimension {
    /// Creates a dimension with its questions in display order.
    pub fn new<Q: Into<String>>(name: impl Into<String>, questions: impl IntoIterator<Item = Q>) -> Self {
        Self {
            name: name.into(),
            questions: questions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("dimension name"));
        }
        if self.name.contains(['\n', '\r']) {
            return Err(ValidationError::invalid_format(
                "dimension name",
                format!("'{}' contains a line break", self.name.escape_default()),
            ));
        }
        // Each dimension becomes a history column next to the overall score.
        if score_column(&self.name) == OVERALL_SCORE_COLUMN {
            return Err(ValidationError::invalid_format(
                "dimension name",
                format!("'{}' is reserved for the overall score", self.name),
            ));
        }
        if self.questions.is_empty() {
            return Err(ValidationError::empty_field(format!(
                "questions of dimension '{}'",
                self.name
            )));
        }
        let mut seen = HashSet::new();
        for question in &self.questions {
            if question.trim().is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "question text in dimension '{}'",
                    self.name
                )));
            }
            if !seen.insert(question.as_str()) {
                return Err(ValidationError::duplicate("question", question.clone()));
            }
        }
        Ok(())
    }
}

/// Ordered set of dimensions making up an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Questionnaire {
    dimensions: Vec<Dimension>,
}

/// On-disk shape of a questionnaire file, validated before use.
#[derive(Debug, Deserialize)]
struct QuestionnaireFile {
    dimensions: Vec<Dimension>,
}

impl Questionnaire {
    /// The built-in Digital Maturity Assessment questionnaire.
    pub fn standard() -> &'static Questionnaire {
        &STANDARD
    }

    /// Creates a builder for constructing a questionnaire.
    pub fn builder() -> QuestionnaireBuilder {
        QuestionnaireBuilder::new()
    }

    /// Parses and validates a questionnaire from YAML.
    ///
    /// ```yaml
    /// dimensions:
    ///   - name: People
    ///     questions:
    ///       - Leadership awareness and commitment
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ValidationError> {
        let file: QuestionnaireFile = serde_yaml::from_str(yaml)
            .map_err(|e| ValidationError::invalid_format("questionnaire", e.to_string()))?;
        Self::validated(file.dimensions)
    }

    fn validated(dimensions: Vec<Dimension>) -> Result<Self, ValidationError> {
        if dimensions.is_empty() {
            return Err(ValidationError::empty_field("dimensions"));
        }
        let mut seen = HashSet::new();
        for dimension in &dimensions {
            dimension.validate()?;
            if !seen.insert(dimension.name()) {
                return Err(ValidationError::duplicate("dimension", dimension.name()));
            }
        }
        Ok(Self { dimensions })
    }

    /// Dimensions in declaration order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Looks up a dimension by name.
    pub fn dimension(&self, name: &str) -> Result<&Dimension, ConfigError> {
        self.dimensions
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| ConfigError::UnknownDimension(name.to_string()))
    }

    /// Returns the ordered questions of a dimension.
    pub fn questions_for(&self, name: &str) -> Result<&[String], ConfigError> {
        self.dimension(name).map(Dimension::questions)
    }

    /// Dimension names in declaration order.
    pub fn dimension_names(&self) -> Vec<&str> {
        self.dimensions.iter().map(Dimension::name).collect()
    }

    pub fn dimension_count(&self) -> usize {
        self.dimensions.len()
    }

    /// Total number of questions across all dimensions.
    pub fn question_count(&self) -> usize {
        self.dimensions.iter().map(Dimension::question_count).sum()
    }
}

/// Builder for constructing Questionnaire instances.
#[derive(Debug, Default)]
pub struct QuestionnaireBuilder {
    dimensions: Vec<Dimension>,
}

impl QuestionnaireBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dimension with its questions.
    pub fn dimension<Q: Into<String>>(
        mut self,
        name: impl Into<String>,
        questions: impl IntoIterator<Item = Q>,
    ) -> Self {
        self.dimensions.push(Dimension::new(name, questions));
        self
    }

    /// Validates and builds the questionnaire.
    pub fn build(self) -> Result<Questionnaire, ValidationError> {
        Questionnaire::validated(self.dimensions)
    }
}
