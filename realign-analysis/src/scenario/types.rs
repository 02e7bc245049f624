//! Scenario comparison result types.

use serde::{Deserialize, Serialize};

use realign_core::types::Position;
use realign_core::warnings::DataWarning;

/// A position field that differs between baseline and variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangedField {
    RoleTitle,
    Fte,
    AnnualCost,
    ReportsTo,
    Level,
}

/// One structural change between the two snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PositionChange {
    Added {
        position: Position,
    },
    Removed {
        position: Position,
    },
    Modified {
        baseline: Position,
        variant: Position,
        fields: Vec<ChangedField>,
    },
}

/// Cost totals and deltas across the comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    pub baseline_cost: f64,
    pub variant_cost: f64,
    pub absolute_change: f64,
    /// Percent of baseline cost; 0 when the baseline has no cost.
    pub percentage_change: f64,
}

/// Headcount totals and deltas across the comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FteImpact {
    pub baseline_fte: f64,
    pub variant_fte: f64,
    pub fte_change: f64,
}

/// Roll-up counts for the comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub positions_added: usize,
    pub positions_removed: usize,
    pub positions_modified: usize,
    pub positions_unchanged: usize,
    pub baseline_positions: usize,
    pub variant_positions: usize,
    pub cost_summary: CostSummary,
    pub fte_impact: FteImpact,
}

/// Full result of comparing a scenario's snapshots. Derived, never
/// persisted by the engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Stable order: added, then removed, then modified, each by
    /// original-list index — repeated runs on identical input produce
    /// byte-identical output.
    pub changes: Vec<PositionChange>,
    /// Variant total cost minus baseline total cost.
    pub delta_cost: f64,
    pub summary: ComparisonSummary,
    /// Narrative risk factors derived from the summary.
    pub risk_factors: Vec<String>,
    /// Confidence in this comparison, 0-100.
    pub confidence_pct: u8,
    pub warnings: Vec<DataWarning>,
}
