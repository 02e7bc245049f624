//! Scenario comparison: structural diffing of baseline/variant
//! position snapshots, with a confidence estimate.

pub mod confidence;
pub mod differ;
pub mod types;

pub use confidence::estimate_confidence;
pub use differ::compare_snapshots;
pub use types::{
    ChangedField, ComparisonResult, ComparisonSummary, CostSummary, FteImpact, PositionChange,
};
