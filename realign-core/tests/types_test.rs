//! Serialization and shape tests for the shared data model.

use realign_core::types::{
    Dimension, OrganizationMetrics, Position, PositionId, QuestionType, RawAnswer, Response,
    ScenarioSnapshot,
};

#[test]
fn response_deserializes_from_caller_json() {
    let json = r#"{
        "question_id": "q42",
        "dimension_tags": ["cultural", "leadership"],
        "raw": 4.0,
        "question_type": {"kind": "likert"}
    }"#;
    let response: Response = serde_json::from_str(json).unwrap();
    assert_eq!(response.question_id, "q42");
    assert_eq!(
        response.dimension_tags.as_slice(),
        &[Dimension::Cultural, Dimension::Leadership]
    );
    assert_eq!(response.raw, RawAnswer::Number(4.0));
    assert_eq!(response.question_type, QuestionType::Likert);
}

#[test]
fn response_without_tags_defaults_to_empty() {
    let json = r#"{
        "question_id": "q1",
        "raw": "often",
        "question_type": {"kind": "categorical"}
    }"#;
    let response: Response = serde_json::from_str(json).unwrap();
    assert!(response.dimension_tags.is_empty());
}

#[test]
fn foreign_question_kind_becomes_unknown() {
    let json = r#"{
        "question_id": "q7",
        "raw": 55.0,
        "question_type": {"kind": "matrix_grid"}
    }"#;
    let response: Response = serde_json::from_str(json).unwrap();
    assert_eq!(response.question_type, QuestionType::Unknown);
}

#[test]
fn snapshot_round_trips_with_weak_parent_refs() {
    let snapshot = ScenarioSnapshot::new(vec![
        Position {
            id: PositionId::from("ceo"),
            role_title: "Chief Executive".to_string(),
            fte: 1.0,
            annual_cost: Some(300_000.0),
            reports_to: None,
            level: 1,
        },
        Position {
            id: PositionId::from("ops-1"),
            role_title: "Operations Lead".to_string(),
            fte: 1.0,
            annual_cost: Some(140_000.0),
            reports_to: Some(PositionId::from("ceo")),
            level: 2,
        },
    ]);

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: ScenarioSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot, back);
    assert_eq!(back.positions[1].reports_to, Some(PositionId::from("ceo")));
}

#[test]
fn metrics_reject_nothing_but_report_completeness() {
    let metrics = OrganizationMetrics {
        hierarchy_levels: Some(0.7),
        process_complexity: Some(0.6),
        change_readiness: Some(0.4),
        digital_maturity: Some(0.9),
        ..Default::default()
    };
    assert!((metrics.completeness() - 0.1).abs() < 1e-12);
}
