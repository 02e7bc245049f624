//! Change readiness index.

use std::collections::BTreeMap;

use realign_core::config::ScoringConfig;
use realign_core::errors::ComputeError;
use realign_core::types::{Dimension, NormalizedResponse, OrganizationMetrics};
use realign_core::warnings::DataWarning;

use super::{blend, dimension_mean, weighted_sum, CompositeIndex, MetricReader};

pub const NAME: &str = "change_readiness";

pub fn compute(
    config: &ScoringConfig,
    metrics: &OrganizationMetrics,
    responses: &[NormalizedResponse],
    computed_at: i64,
) -> Result<(CompositeIndex, Vec<DataWarning>), ComputeError> {
    let w = &config.readiness;
    let mut reader = MetricReader::new();

    let leadership_support = blend(
        &[reader.get("leadership_effectiveness", metrics.leadership_effectiveness)],
        dimension_mean(responses, Dimension::Leadership),
    );
    let culture_adaptability = blend(
        &[
            reader.get("change_readiness", metrics.change_readiness),
            reader.get("innovation_capacity", metrics.innovation_capacity),
        ],
        dimension_mean(responses, Dimension::Cultural),
    );
    let communication_effectiveness = blend(
        &[reader.get("communication_efficiency", metrics.communication_efficiency)],
        None,
    );
    let resource_availability = blend(
        &[
            reader.get("resource_utilization", metrics.resource_utilization),
            reader.get("budget_efficiency", metrics.budget_efficiency),
        ],
        dimension_mean(responses, Dimension::Financial),
    );
    let process_flexibility = blend(
        &[
            reader.get("process_complexity", metrics.process_complexity),
            reader.get("task_automation_level", metrics.task_automation_level),
        ],
        dimension_mean(responses, Dimension::Operational),
    );
    let stakeholder_engagement = blend(
        &[
            reader.get("employee_engagement", metrics.employee_engagement),
            reader.get("customer_satisfaction", metrics.customer_satisfaction),
        ],
        None,
    );

    let overall = weighted_sum(
        NAME,
        &[
            (leadership_support, w.leadership_support),
            (culture_adaptability, w.culture_adaptability),
            (communication_effectiveness, w.communication_effectiveness),
            (resource_availability, w.resource_availability),
            (process_flexibility, w.process_flexibility),
            (stakeholder_engagement, w.stakeholder_engagement),
        ],
    )?;

    let mut sub_scores = BTreeMap::new();
    sub_scores.insert("leadership_support".to_string(), leadership_support);
    sub_scores.insert("culture_adaptability".to_string(), culture_adaptability);
    sub_scores.insert(
        "communication_effectiveness".to_string(),
        communication_effectiveness,
    );
    sub_scores.insert("resource_availability".to_string(), resource_availability);
    sub_scores.insert("process_flexibility".to_string(), process_flexibility);
    sub_scores.insert("stakeholder_engagement".to_string(), stakeholder_engagement);

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_metrics_still_score() {
        let config = ScoringConfig::default();
        let metrics = OrganizationMetrics {
            change_readiness: Some(0.8),
            ..Default::default()
        };
        let (index, warnings) = compute(&config, &metrics, &[], 0).unwrap();
        assert!((0.0..=1.0).contains(&index.overall_score));
        // Everything except change_readiness was substituted.
        assert!(!warnings.is_empty());
    }

    #[test]
    fn higher_readiness_metrics_raise_the_index() {
        let config = ScoringConfig::default();
        let low = OrganizationMetrics {
            change_readiness: Some(0.2),
            innovation_capacity: Some(0.2),
            ..Default::default()
        };
        let high = OrganizationMetrics {
            change_readiness: Some(0.9),
            innovation_capacity: Some(0.9),
            ..Default::default()
        };
        let low_score = compute(&config, &low, &[], 0).unwrap().0.overall_score;
        let high_score = compute(&config, &high, &[], 0).unwrap().0.overall_score;
        assert!(high_score > low_score);
    }
}
