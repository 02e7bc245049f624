//! Id-matched structural diff between two position snapshots.
//!
//! Matching is strictly by `Position.id`: a position re-hired under a
//! new id appears as one removed plus one added, never as modified.
//! That conflates "role renamed" with "role replaced" when ids change;
//! downstream confidence and ROI math assume this matching rule, so it
//! is preserved rather than "fixed".

use rustc_hash::FxHashMap;

use realign_core::errors::InputError;
use realign_core::types::{Position, Scenario};
use realign_core::warnings::{DataWarning, SnapshotSide};

use super::confidence::estimate_confidence;
use super::types::{
    ChangedField, ComparisonResult, ComparisonSummary, CostSummary, FteImpact, PositionChange,
};

/// Compare a scenario's baseline and variant snapshots.
///
/// Pure and idempotent: the result is a function of the two snapshots
/// alone, and the change list is emitted in a stable order (added,
/// removed, modified, each by original-list index) so identical inputs
/// produce byte-identical output.
pub fn compare_snapshots(scenario: &Scenario) -> Result<ComparisonResult, InputError> {
    scenario.baseline.validate()?;
    scenario.variant.validate()?;

    let baseline = &scenario.baseline.positions;
    let variant = &scenario.variant.positions;

    let baseline_by_id: FxHashMap<&str, &Position> =
        baseline.iter().map(|p| (p.id.as_str(), p)).collect();
    let variant_by_id: FxHashMap<&str, &Position> =
        variant.iter().map(|p| (p.id.as_str(), p)).collect();

    let mut changes = Vec::new();

    // Added: in variant, not in baseline — variant list order.
    for position in variant {
        if !baseline_by_id.contains_key(position.id.as_str()) {
            changes.push(PositionChange::Added {
                position: position.clone(),
            });
        }
    }

    // Removed: in baseline, not in variant — baseline list order.
    for position in baseline {
        if !variant_by_id.contains_key(position.id.as_str()) {
            changes.push(PositionChange::Removed {
                position: position.clone(),
            });
        }
    }

    // Modified: in both with differing fields — baseline list order.
    let mut unchanged = 0usize;
    for position in baseline {
        if let Some(other) = variant_by_id.get(position.id.as_str()) {
            let fields = changed_fields(position, other);
            if fields.is_empty() {
                unchanged += 1;
            } else {
                changes.push(PositionChange::Modified {
                    baseline: position.clone(),
                    variant: (*other).clone(),
                    fields,
                });
            }
        }
    }

    let (added, removed, modified) = count_changes(&changes);

    let baseline_cost = scenario.baseline.total_cost();
    let variant_cost = scenario.variant.total_cost();
    let delta_cost = variant_cost - baseline_cost;
    let baseline_fte = scenario.baseline.total_fte();
    let variant_fte = scenario.variant.total_fte();

    let summary = ComparisonSummary {
        positions_added: added,
        positions_removed: removed,
        positions_modified: modified,
        positions_unchanged: unchanged,
        baseline_positions: baseline.len(),
        variant_positions: variant.len(),
        cost_summary: CostSummary {
            baseline_cost,
            variant_cost,
            absolute_change: delta_cost,
            percentage_change: if baseline_cost > 0.0 {
                delta_cost / baseline_cost * 100.0
            } else {
                0.0
            },
        },
        fte_impact: FteImpact {
            baseline_fte,
            variant_fte,
            fte_change: variant_fte - baseline_fte,
        },
    };

    let mut warnings = Vec::new();
    if scenario.baseline.is_empty() {
        warnings.push(DataWarning::EmptySnapshot {
            side: SnapshotSide::Baseline,
        });
    }
    if scenario.variant.is_empty() {
        warnings.push(DataWarning::EmptySnapshot {
            side: SnapshotSide::Variant,
        });
    }
    for position in baseline.iter().chain(variant.iter()) {
        if !position.has_cost_data() {
            warnings.push(DataWarning::MissingCostData {
                position_id: position.id.to_string(),
            });
        }
    }

    let confidence_pct = estimate_confidence(changes.len(), scenario);
    let risk_factors = risk_factors(&summary);

    tracing::debug!(
        added,
        removed,
        modified,
        delta_cost,
        confidence_pct,
        "scenario comparison computed"
    );

    Ok(ComparisonResult {
        changes,
        delta_cost,
        summary,
        risk_factors,
        confidence_pct,
        warnings,
    })
}

fn changed_fields(baseline: &Position, variant: &Position) -> Vec<ChangedField> {
    let mut fields = Vec::new();
    if baseline.role_title != variant.role_title {
        fields.push(ChangedField::RoleTitle);
    }
    if baseline.fte != variant.fte {
        fields.push(ChangedField::Fte);
    }
    if baseline.annual_cost != variant.annual_cost {
        fields.push(ChangedField::AnnualCost);
    }
    if baseline.reports_to != variant.reports_to {
        fields.push(ChangedField::ReportsTo);
    }
    if baseline.level != variant.level {
        fields.push(ChangedField::Level);
    }
    fields
}

fn count_changes(changes: &[PositionChange]) -> (usize, usize, usize) {
    let mut added = 0;
    let mut removed = 0;
    let mut modified = 0;
    for change in changes {
        match change {
            PositionChange::Added { .. } => added += 1,
            PositionChange::Removed { .. } => removed += 1,
            PositionChange::Modified { .. } => modified += 1,
        }
    }
    (added, removed, modified)
}

/// Narrative risk factors from the comparison summary.
fn risk_factors(summary: &ComparisonSummary) -> Vec<String> {
    let mut risks = Vec::new();

    if summary.cost_summary.percentage_change > 20.0 {
        risks.push("Financial risk: cost increase exceeds 20% of baseline".to_string());
    }
    if summary.fte_impact.baseline_fte > 0.0
        && summary.fte_impact.fte_change < -0.2 * summary.fte_impact.baseline_fte
    {
        risks.push("Operational risk: workforce reduction exceeds 20%".to_string());
    }
    if summary.baseline_positions > 0
        && summary.positions_modified * 2 > summary.baseline_positions
    {
        risks.push("Change management risk: over half of positions modified".to_string());
    }
    if summary.baseline_positions > 0
        && summary.positions_added * 10 > summary.baseline_positions * 3
    {
        risks.push("Implementation risk: significant new hiring required".to_string());
    }

    risks
}
