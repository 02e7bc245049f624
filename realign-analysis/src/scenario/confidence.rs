//! Confidence estimation for scenario comparisons.
//!
//! Pure function of the change list and the scenario's snapshots — no
//! randomness, same inputs always yield the same confidence.

use realign_core::types::Scenario;

/// Points deducted per simultaneous change.
const VOLUME_DEDUCTION_PER_CHANGE: f64 = 2.0;
/// Cap on the change-volume deduction.
const VOLUME_DEDUCTION_CAP: f64 = 30.0;
/// Flat deduction when either snapshot has no positions.
const EMPTY_SNAPSHOT_DEDUCTION: f64 = 20.0;
/// Deduction per percentage point of cost-incomplete positions.
const INCOMPLETE_FACTOR: f64 = 0.5;
/// Cap on the cost-incompleteness deduction.
const INCOMPLETE_CAP: f64 = 25.0;

/// Estimate how trustworthy a comparison is, 0-100.
///
/// Starts at 100 and deducts for change volume (more simultaneous
/// changes mean more uncertainty), for empty snapshots, and for the
/// share of positions lacking cost data. Clamped and rounded to the
/// nearest integer.
pub fn estimate_confidence(change_count: usize, scenario: &Scenario) -> u8 {
    let mut confidence = 100.0;

    confidence -= (change_count as f64 * VOLUME_DEDUCTION_PER_CHANGE).min(VOLUME_DEDUCTION_CAP);

    if scenario.baseline.is_empty() || scenario.variant.is_empty() {
        confidence -= EMPTY_SNAPSHOT_DEDUCTION;
    }

    confidence -= (incomplete_pct(scenario) * INCOMPLETE_FACTOR).min(INCOMPLETE_CAP);

    confidence.clamp(0.0, 100.0).round() as u8
}

/// Percentage (0-100) of positions, across both snapshots, lacking
/// cost data.
fn incomplete_pct(scenario: &Scenario) -> f64 {
    let total = scenario.baseline.positions.len() + scenario.variant.positions.len();
    if total == 0 {
        return 0.0;
    }
    let incomplete = scenario
        .baseline
        .positions
        .iter()
        .chain(scenario.variant.positions.iter())
        .filter(|p| !p.has_cost_data())
        .count();
    incomplete as f64 / total as f64 * 100.0
}
