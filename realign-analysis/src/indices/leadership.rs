//! Leadership effectiveness index.

use std::collections::BTreeMap;

use realign_core::config::ScoringConfig;
use realign_core::errors::ComputeError;
use realign_core::types::{Dimension, NormalizedResponse, OrganizationMetrics};
use realign_core::warnings::DataWarning;

use super::{blend, dimension_mean, weighted_sum, CompositeIndex, MetricReader};

pub const NAME: &str = "leadership_effectiveness";

pub fn compute(
    config: &ScoringConfig,
    metrics: &OrganizationMetrics,
    responses: &[NormalizedResponse],
    computed_at: i64,
) -> Result<(CompositeIndex, Vec<DataWarning>), ComputeError> {
    let w = &config.leadership;
    let mut reader = MetricReader::new();

    let vision_strategy = blend(
        &[
            reader.get("goal_alignment", metrics.goal_alignment),
            reader.get("future_readiness", metrics.future_readiness),
        ],
        None,
    );
    let communication = blend(
        &[reader.get("communication_efficiency", metrics.communication_efficiency)],
        None,
    );
    let decision_making = blend(
        &[reader.get("decision_latency", metrics.decision_latency)],
        None,
    );
    let team_development = blend(
        &[
            reader.get("employee_engagement", metrics.employee_engagement),
            reader.get("employee_retention", metrics.employee_retention),
        ],
        None,
    );
    // Survey-driven component: leadership-tagged responses speak to EQ
    // more directly than any structural metric does.
    let emotional_intelligence = blend(
        &[reader.get("collaboration_index", metrics.collaboration_index)],
        dimension_mean(responses, Dimension::Leadership),
    );
    let change_leadership = blend(
        &[
            reader.get("change_readiness", metrics.change_readiness),
            reader.get("leadership_effectiveness", metrics.leadership_effectiveness),
        ],
        None,
    );

    let overall = weighted_sum(
        NAME,
        &[
            (vision_strategy, w.vision_strategy),
            (communication, w.communication),
            (decision_making, w.decision_making),
            (team_development, w.team_development),
            (emotional_intelligence, w.emotional_intelligence),
            (change_leadership, w.change_leadership),
        ],
    )?;

    let mut sub_scores = BTreeMap::new();
    sub_scores.insert("vision_strategy".to_string(), vision_strategy);
    sub_scores.insert("communication".to_string(), communication);
    sub_scores.insert("decision_making".to_string(), decision_making);
    sub_scores.insert("team_development".to_string(), team_development);
    sub_scores.insert("emotional_intelligence".to_string(), emotional_intelligence);
    sub_scores.insert("change_leadership".to_string(), change_leadership);

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
