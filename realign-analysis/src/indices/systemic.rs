//! Systemic complexity index — higher-order interactions between
//! hierarchy depth, interdependence, process layering, and decision
//! latency.

use std::collections::BTreeMap;

use realign_core::config::ScoringConfig;
use realign_core::errors::ComputeError;
use realign_core::types::{Dimension, NormalizedResponse, OrganizationMetrics};
use realign_core::warnings::DataWarning;

use super::{blend, dimension_mean, weighted_sum, CompositeIndex, MetricReader};

pub const NAME: &str = "systemic_complexity";

pub fn compute(
    config: &ScoringConfig,
    metrics: &OrganizationMetrics,
    responses: &[NormalizedResponse],
    computed_at: i64,
) -> Result<(CompositeIndex, Vec<DataWarning>), ComputeError> {
    let w = &config.systemic;
    let mut reader = MetricReader::new();

    let hierarchy_depth = blend(
        &[
            reader.get("hierarchy_levels", metrics.hierarchy_levels),
            reader.get("span_of_control", metrics.span_of_control),
        ],
        None,
    );
    let interdependence = blend(
        &[
            reader.get("system_integration", metrics.system_integration),
            reader.get("reporting_relationships", metrics.reporting_relationships),
        ],
        dimension_mean(responses, Dimension::Technological),
    );
    let process_layering = blend(
        &[reader.get("process_complexity", metrics.process_complexity)],
        dimension_mean(responses, Dimension::Operational),
    );
    let decision_latency = blend(
        &[reader.get("decision_latency", metrics.decision_latency)],
        None,
    );

    let overall = weighted_sum(
        NAME,
        &[
            (hierarchy_depth, w.hierarchy_depth),
            (interdependence, w.interdependence),
            (process_layering, w.process_layering),
            (decision_latency, w.decision_latency),
        ],
    )?;

    let mut sub_scores = BTreeMap::new();
    sub_scores.insert("hierarchy_depth".to_string(), hierarchy_depth);
    sub_scores.insert("interdependence".to_string(), interdependence);
    sub_scores.insert("process_layering".to_string(), process_layering);
    sub_scores.insert("decision_latency".to_string(), decision_latency);

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
    fn indices_do_not_share_state() {
        // Computing one index never mutates inputs another reads.
        let config = ScoringConfig::default();
        let metrics = OrganizationMetrics {
            hierarchy_levels: Some(0.7),
            process_complexity: Some(0.4),
            ..Default::default()
        };
        let before = metrics.clone();
        let _ = compute(&config, &metrics, &[], 0).unwrap();
        let _ = super::super::structural::compute(&config, &metrics, &[], 0).unwrap();
        assert_eq!(metrics, before);
    }

    #[test]
    fn sub_scores_are_recorded_per_component() {
        let config = ScoringConfig::default();
        let (index, _) = compute(&config, &OrganizationMetrics::default(), &[], 0).unwrap();
        assert_eq!(index.sub_scores.len(), 4);
        assert!(index.sub_scores.contains_key("interdependence"));
    }
}
