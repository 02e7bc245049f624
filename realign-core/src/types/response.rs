//! Survey response types — tagged question/answer variants and the
//! normalized form the calculators consume.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Analysis dimension a survey question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Structural,
    Operational,
    Cultural,
    Strategic,
    Financial,
    Technological,
    Leadership,
}

impl Dimension {
    /// All dimensions, in stable order.
    pub const ALL: &'static [Dimension] = &[
        Self::Structural,
        Self::Operational,
        Self::Cultural,
        Self::Strategic,
        Self::Financial,
        Self::Technological,
        Self::Leadership,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Operational => "operational",
            Self::Cultural => "cultural",
            Self::Strategic => "strategic",
            Self::Financial => "financial",
            Self::Technological => "technological",
            Self::Leadership => "leadership",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dimension tags carried by a question. Questions rarely tag more than
/// a few dimensions, so this stays inline.
pub type DimensionTags = SmallVec<[Dimension; 4]>;

/// Declared type of a survey question, with its value domain.
///
/// Foreign data may carry question types this engine does not know;
/// those deserialize to `Unknown` and are normalized as numeric over
/// [0, 100] with a warning, rather than failing the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionType {
    /// Five-point ordinal scale, domain [1, 5].
    Likert,
    /// Free numeric value over a declared domain.
    Numeric { min: f64, max: f64 },
    /// Percentage, domain [0, 100].
    Percentage,
    /// Closed category set mapped through a per-question lookup table.
    Categorical,
    /// Unrecognized question type from foreign data.
    #[serde(other)]
    Unknown,
}

impl QuestionType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Likert => "likert",
            Self::Numeric { .. } => "numeric",
            Self::Percentage => "percentage",
            Self::Categorical => "categorical",
            Self::Unknown => "unknown",
        }
    }
}

/// A raw answer value as submitted. Numeric for scaled questions,
/// text for categorical ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Number(f64),
    Text(String),
}

/// A submitted answer to one question, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub question_id: String,
    #[serde(default)]
    pub dimension_tags: DimensionTags,
    pub raw: RawAnswer,
    pub question_type: QuestionType,
}

/// A response after normalization. Immutable once produced; the
/// normalized value is always in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResponse {
    pub question_id: String,
    pub dimension_tags: DimensionTags,
    pub raw: RawAnswer,
    pub normalized: f64,
    /// Set when the value could not be resolved confidently (unmapped
    /// category, unknown question type) and fell back to the midpoint.
    pub low_confidence: bool,
}

impl NormalizedResponse {
    /// Whether this response is tagged with the given dimension.
    pub fn has_dimension(&self, dimension: Dimension) -> bool {
        self.dimension_tags.contains(&dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_question_type_deserializes_from_foreign_kind() {
        let json = r#"{"kind": "slider"}"#;
        let qt: QuestionType = serde_json::from_str(json).unwrap();
        assert_eq!(qt, QuestionType::Unknown);
    }

    #[test]
    fn likert_question_type_round_trips() {
        let qt = QuestionType::Numeric { min: 0.0, max: 10.0 };
        let json = serde_json::to_string(&qt).unwrap();
        let back: QuestionType = serde_json::from_str(&json).unwrap();
        assert_eq!(qt, back);
    }

    #[test]
    fn raw_answer_accepts_number_and_text() {
        let n: RawAnswer = serde_json::from_str("3.5").unwrap();
        assert_eq!(n, RawAnswer::Number(3.5));
        let t: RawAnswer = serde_json::from_str(r#""often""#).unwrap();
        assert_eq!(t, RawAnswer::Text("often".to_string()));
    }

    #[test]
    fn dimension_names_are_stable() {
        for d in Dimension::ALL {
            assert!(!d.name().is_empty());
        }
        assert_eq!(Dimension::Structural.to_string(), "structural");
    }
}
