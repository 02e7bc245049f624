//! Data-completeness warnings.
//!
//! Not errors: each warning marks a degradation that was absorbed so a
//! result could still be produced. Downstream confidence scoring folds
//! them in, so partial data yields an appropriately-discounted answer
//! instead of a failure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a scenario a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotSide {
    Baseline,
    Variant,
}

impl fmt::Display for SnapshotSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Baseline => f.write_str("baseline"),
            Self::Variant => f.write_str("variant"),
        }
    }
}

/// A recorded degradation during computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataWarning {
    /// An organization metric was absent; the midpoint was used.
    MissingMetric { field: String },
    /// A categorical answer had no entry in its lookup table.
    UnmappedCategory { question_id: String, value: String },
    /// Question type was not recognized; numeric [0, 100] fallback used.
    UnknownQuestionType { question_id: String },
    /// A numeric answer fell outside its declared domain and was clamped.
    ValueOutOfDomain { question_id: String, value: f64 },
    /// A declared numeric domain had max <= min; midpoint used.
    DegenerateDomain { question_id: String },
    /// A snapshot's position list was absent or empty.
    EmptySnapshot { side: SnapshotSide },
    /// A position carried no cost data.
    MissingCostData { position_id: String },
    /// Monte Carlo iteration count below 1 was raised to 1.
    IterationsClamped { requested: u32 },
}

impl fmt::Display for DataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMetric { field } => {
                write!(f, "metric {field} missing, midpoint substituted")
            }
            Self::UnmappedCategory { question_id, value } => {
                write!(f, "question {question_id}: unmapped category {value:?}")
            }
            Self::UnknownQuestionType { question_id } => {
                write!(f, "question {question_id}: unknown question type")
            }
            Self::ValueOutOfDomain { question_id, value } => {
                write!(f, "question {question_id}: value {value} out of domain, clamped")
            }
            Self::DegenerateDomain { question_id } => {
                write!(f, "question {question_id}: degenerate domain, midpoint substituted")
            }
            Self::EmptySnapshot { side } => write!(f, "{side} snapshot has no positions"),
            Self::MissingCostData { position_id } => {
                write!(f, "position {position_id} has no cost data")
            }
            Self::IterationsClamped { requested } => {
                write!(f, "iteration count {requested} raised to 1")
            }
        }
    }
}
