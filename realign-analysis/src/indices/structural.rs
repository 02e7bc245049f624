//! Structural complexity heuristic.
//!
//! Weighted blend of structural, operational, cultural, and strategic
//! components, followed by a documented non-linear adjustment: when the
//! normalized hierarchy depth exceeds the configured threshold, up to
//! `hierarchy_penalty_max` is subtracted, proportional to how far
//! beyond the threshold the depth sits. The penalty is recorded as a
//! sub-score so reports can reproduce the exact adjustment.

use std::collections::BTreeMap;

use realign_core::config::ScoringConfig;
use realign_core::constants::NEUTRAL_MIDPOINT;
use realign_core::errors::ComputeError;
use realign_core::types::{Dimension, NormalizedResponse, OrganizationMetrics};
use realign_core::warnings::DataWarning;

use super::{blend, dimension_mean, weighted_sum, CompositeIndex, MetricReader};

pub const NAME: &str = "structural_complexity";

pub fn compute(
    config: &ScoringConfig,
    metrics: &OrganizationMetrics,
    responses: &[NormalizedResponse],
    computed_at: i64,
) -> Result<(CompositeIndex, Vec<DataWarning>), ComputeError> {
    let w = &config.structural;
    let mut reader = MetricReader::new();

    let structural = blend(
        &[
            reader.get("hierarchy_levels", metrics.hierarchy_levels),
            reader.get("span_of_control", metrics.span_of_control),
            reader.get("reporting_relationships", metrics.reporting_relationships),
        ],
        dimension_mean(responses, Dimension::Structural),
    );
    let operational = blend(
        &[
            reader.get("process_complexity", metrics.process_complexity),
            reader.get("decision_latency", metrics.decision_latency),
            reader.get("communication_efficiency", metrics.communication_efficiency),
        ],
        dimension_mean(responses, Dimension::Operational),
    );
    let cultural = blend(
        &[
            reader.get("collaboration_index", metrics.collaboration_index),
            reader.get("employee_engagement", metrics.employee_engagement),
        ],
        dimension_mean(responses, Dimension::Cultural),
    );
    let strategic = blend(
        &[
            reader.get("goal_alignment", metrics.goal_alignment),
            reader.get("strategic_agility", metrics.strategic_agility),
        ],
        dimension_mean(responses, Dimension::Strategic),
    );

    let base = weighted_sum(
        NAME,
        &[
            (structural, w.structural),
            (operational, w.operational),
            (cultural, w.cultural),
            (strategic, w.strategic),
        ],
    )?;

    // Hierarchy depth penalty. Missing depth resolves to the midpoint,
    // which sits below the default threshold, so absent data is never
    // penalized.
    let depth = metrics
        .hierarchy_levels
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 1.0))
        .unwrap_or(NEUTRAL_MIDPOINT);
    let penalty = hierarchy_penalty(depth, w.hierarchy_penalty_threshold, w.hierarchy_penalty_max);
    let overall = (base - penalty).clamp(0.0, 1.0);

    let mut sub_scores = BTreeMap::new();
    sub_scores.insert("structural".to_string(), structural);
    sub_scores.insert("operational".to_string(), operational);
    sub_scores.insert("cultural".to_string(), cultural);
    sub_scores.insert("strategic".to_string(), strategic);
    sub_scores.insert("hierarchy_penalty".to_string(), penalty);

    Ok((
        CompositeIndex {
            name: NAME.to_string(),
            version: config.version.clone(),
            overall_score: overall,
            sub_scores,
            computed_at,
        },
        reader.into_warnings(),
    ))
}

/// Penalty in [0, max]: zero at or below the threshold, scaling
/// linearly to `max` as depth approaches 1.0.
fn hierarchy_penalty(depth: f64, threshold: f64, max: f64) -> f64 {
    if depth <= threshold {
        return 0.0;
    }
    let excess = (depth - threshold) / (1.0 - threshold);
    (excess * max).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_metrics(value: f64) -> OrganizationMetrics {
        OrganizationMetrics {
            hierarchy_levels: Some(value),
            span_of_control: Some(value),
            reporting_relationships: Some(value),
            process_complexity: Some(value),
            decision_latency: Some(value),
            communication_efficiency: Some(value),
            collaboration_index: Some(value),
            employee_engagement: Some(value),
            goal_alignment: Some(value),
            strategic_agility: Some(value),
            ..Default::default()
        }
    }

    #[test]
    fn no_penalty_below_threshold() {
        assert_eq!(hierarchy_penalty(0.5, 0.6, 0.15), 0.0);
        assert_eq!(hierarchy_penalty(0.6, 0.6, 0.15), 0.0);
    }

    #[test]
    fn penalty_scales_to_max_at_full_depth() {
        let p = hierarchy_penalty(1.0, 0.6, 0.15);
        assert!((p - 0.15).abs() < 1e-12);
        let halfway = hierarchy_penalty(0.8, 0.6, 0.15);
        assert!((halfway - 0.075).abs() < 1e-12);
    }

    #[test]
    fn deep_hierarchy_lowers_the_score() {
        let config = ScoringConfig::default();
        let shallow = compute(&config, &full_metrics(0.5), &[], 0).unwrap().0;
        let mut deep_metrics = full_metrics(0.5);
        deep_metrics.hierarchy_levels = Some(0.95);
        let deep = compute(&config, &deep_metrics, &[], 0).unwrap().0;
        assert!(deep.overall_score < shallow.overall_score);
        assert!(deep.sub_scores["hierarchy_penalty"] > 0.0);
    }

    #[test]
    fn empty_inputs_still_produce_a_score() {
        let config = ScoringConfig::default();
        let (index, warnings) = compute(&config, &OrganizationMetrics::default(), &[], 0).unwrap();
        // All components at the midpoint, no penalty at 0.5 depth.
        assert!((index.overall_score - 0.5).abs() < 1e-9);
        assert_eq!(warnings.len(), 10);
    }

    #[test]
    fn recomputation_is_bit_identical() {
        let config = ScoringConfig::default();
        let metrics = full_metrics(0.73);
        let a = compute(&config, &metrics, &[], 0).unwrap().0;
        let b = compute(&config, &metrics, &[], 0).unwrap().0;
        assert_eq!(a.overall_score.to_bits(), b.overall_score.to_bits());
        assert_eq!(a.sub_scores, b.sub_scores);
    }
}
