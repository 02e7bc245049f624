//! End-to-end pipeline: raw responses through normalization, indices,
//! scenario comparison, ROI, and recommendations.

use realign_core::config::EngineConfig;
use realign_core::types::{
    Dimension, DimensionTags, OrganizationMetrics, Position, PositionId, QuestionType, RawAnswer,
    Response, Scenario, ScenarioSnapshot,
};

use realign_analysis::indices;
use realign_analysis::normalize::normalize_responses;
use realign_analysis::recommend::{synthesize, RecommendationContext};
use realign_analysis::roi::{CalculationMode, RoiEngine, RoiInputs, RoiRequest};
use realign_analysis::scenario::compare_snapshots;

fn survey() -> Vec<Response> {
    let mut responses = Vec::new();
    let questions: [(&str, Dimension, f64); 6] = [
        ("q-span", Dimension::Structural, 2.0),
        ("q-culture", Dimension::Cultural, 4.0),
        ("q-tech", Dimension::Technological, 3.0),
        ("q-change", Dimension::Cultural, 2.0),
        ("q-lead", Dimension::Leadership, 3.0),
        ("q-ops", Dimension::Operational, 4.0),
    ];
    for (id, dimension, value) in questions {
        let mut tags = DimensionTags::new();
        tags.push(dimension);
        responses.push(Response {
            question_id: id.to_string(),
            dimension_tags: tags,
            raw: RawAnswer::Number(value),
            question_type: QuestionType::Likert,
        });
    }
    responses
}

fn position(id: &str, cost: f64) -> Position {
    Position {
        id: PositionId::from(id),
        role_title: "Role".to_string(),
        fte: 1.0,
        annual_cost: Some(cost),
        reports_to: None,
        level: 2,
    }
}

#[test]
fn full_pipeline_produces_consistent_artifacts() {
    let config = EngineConfig::default();

    // 1. Normalize raw survey responses.
    let batch = normalize_responses(&config.scoring, &survey());
    assert_eq!(batch.responses.len(), 6);
    assert!(batch.warnings.is_empty());

    // 2. Composite indices over metrics + responses.
    let metrics = OrganizationMetrics {
        hierarchy_levels: Some(0.8),
        span_of_control: Some(0.4),
        process_complexity: Some(0.45),
        change_readiness: Some(0.35),
        leadership_effectiveness: Some(0.4),
        communication_efficiency: Some(0.5),
        ..Default::default()
    };
    let report = indices::compute_all(&config.scoring, &metrics, &batch.responses).unwrap();
    assert_eq!(report.indices.len(), 5);

    // 3. Scenario comparison.
    let baseline: Vec<Position> = (0..12)
        .map(|i| position(&format!("p{i}"), 95_000.0))
        .collect();
    let variant: Vec<Position> = baseline[..9].to_vec();
    let scenario = Scenario::new(ScenarioSnapshot::new(baseline), ScenarioSnapshot::new(variant));
    let comparison = compare_snapshots(&scenario).unwrap();
    assert_eq!(comparison.summary.positions_removed, 3);
    assert!(comparison.delta_cost < 0.0);

    // 4. ROI from the comparison's cost deltas.
    let engine = RoiEngine::new(&config.roi);
    let roi_inputs = RoiInputs::from_comparison(&comparison, 120_000.0);
    let roi = engine
        .calculate(&roi_inputs, &RoiRequest::new(CalculationMode::Detailed), None)
        .unwrap();
    assert!(roi.roi_pct > 0.0, "cost cut should project positive ROI");

    // 5. Recommendations over everything computed so far.
    let ctx = RecommendationContext {
        indices: Some(&report),
        comparison: Some(&comparison),
        roi: Some(&roi),
    };
    let recommendations = synthesize(&ctx, 6);
    assert!(!recommendations.is_empty());
    assert!(recommendations.len() <= 6);
    // Low change-readiness metrics must surface a readiness action.
    assert!(recommendations.iter().any(|r| r.id == "readiness-program"));
    // Priorities are descending.
    for pair in recommendations.windows(2) {
        assert!(pair[0].priority >= pair[1].priority);
    }
}

#[test]
fn results_serialize_for_any_caller_layer() {
    let config = EngineConfig::default();
    let batch = normalize_responses(&config.scoring, &survey());
    let report = indices::compute_all(
        &config.scoring,
        &OrganizationMetrics::default(),
        &batch.responses,
    )
    .unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let back: indices::IndexReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, back);
}
