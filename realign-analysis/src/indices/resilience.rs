//! Cultural resilience factor.

use std::collections::BTreeMap;

use realign_core::config::ScoringConfig;
use realign_core::errors::ComputeError;
use realign_core::types::{Dimension, NormalizedResponse, OrganizationMetrics};
use realign_core::warnings::DataWarning;

use super::{blend, dimension_mean, weighted_sum, CompositeIndex, MetricReader};

pub const NAME: &str = "cultural_resilience";

pub fn compute(
    config: &ScoringConfig,
    metrics: &OrganizationMetrics,
    responses: &[NormalizedResponse],
    computed_at: i64,
) -> Result<(CompositeIndex, Vec<DataWarning>), ComputeError> {
    let w = &config.resilience;
    let mut reader = MetricReader::new();

    let values_alignment = blend(
        &[reader.get("employee_engagement", metrics.employee_engagement)],
        dimension_mean(responses, Dimension::Cultural),
    );
    let behavioral_consistency = blend(
        &[
            reader.get("collaboration_index", metrics.collaboration_index),
            reader.get("compliance_level", metrics.compliance_level),
        ],
        None,
    );
    let adaptability = blend(
        &[
            reader.get("change_readiness", metrics.change_readiness),
            reader.get("strategic_agility", metrics.strategic_agility),
        ],
        None,
    );
    let cohesion = blend(
        &[
            reader.get("employee_retention", metrics.employee_retention),
            reader.get("collaboration_index", metrics.collaboration_index),
        ],
        None,
    );
    let innovation_openness = blend(
        &[
            reader.get("innovation_capacity", metrics.innovation_capacity),
            reader.get("ai_readiness", metrics.ai_readiness),
        ],
        None,
    );

    let overall = weighted_sum(
        NAME,
        &[
            (values_alignment, w.values_alignment),
            (behavioral_consistency, w.behavioral_consistency),
            (adaptability, w.adaptability),
            (cohesion, w.cohesion),
            (innovation_openness, w.innovation_openness),
        ],
    )?;

    let mut sub_scores = BTreeMap::new();
    sub_scores.insert("values_alignment".to_string(), values_alignment);
    sub_scores.insert("behavioral_consistency".to_string(), behavioral_consistency);
    sub_scores.insert("adaptability".to_string(), adaptability);
    sub_scores.insert("cohesion".to_string(), cohesion);
    sub_scores.insert("innovation_openness".to_string(), innovation_openness);

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
    use realign_core::types::{DimensionTags, RawAnswer};

    fn tagged_response(value: f64) -> NormalizedResponse {
        let mut tags = DimensionTags::new();
        tags.push(Dimension::Cultural);
        NormalizedResponse {
            question_id: "q".to_string(),
            dimension_tags: tags,
            raw: RawAnswer::Number(value),
            normalized: value,
            low_confidence: false,
        }
    }

    #[test]
    fn cultural_responses_lift_values_alignment() {
        let config = ScoringConfig::default();
        let metrics = OrganizationMetrics {
            employee_engagement: Some(0.5),
            ..Default::default()
        };
        let without = compute(&config, &metrics, &[], 0).unwrap().0;
        let with = compute(&config, &metrics, &[tagged_response(1.0)], 0).unwrap().0;
        assert!(with.sub_scores["values_alignment"] > without.sub_scores["values_alignment"]);
        assert!(with.overall_score > without.overall_score);
    }

    #[test]
    fn score_bounded_at_extremes() {
        let config = ScoringConfig::default();
        let maxed = OrganizationMetrics {
            employee_engagement: Some(1.0),
            collaboration_index: Some(1.0),
            compliance_level: Some(1.0),
            change_readiness: Some(1.0),
            strategic_agility: Some(1.0),
            employee_retention: Some(1.0),
            innovation_capacity: Some(1.0),
            ai_readiness: Some(1.0),
            ..Default::default()
        };
        let (index, warnings) = compute(&config, &maxed, &[], 0).unwrap();
        assert!((index.overall_score - 1.0).abs() < 1e-9);
        assert!(warnings.is_empty());
    }
}
