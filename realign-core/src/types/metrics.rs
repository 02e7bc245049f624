//! Flat organization metrics record consumed by the index calculators.

use serde::{Deserialize, Serialize};

/// A flat record of named organizational metrics, each normalized to
/// [0, 1] by the upstream mapping layer (higher = healthier posture;
/// risk fields are pre-inverted upstream so the convention holds
/// everywhere).
///
/// Assessments are frequently partially answered, so every field is
/// optional. Calculators resolve a missing field to the neutral
/// midpoint and record a [`DataWarning`](crate::warnings::DataWarning)
/// instead of erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OrganizationMetrics {
    // Structural
    pub hierarchy_levels: Option<f64>,
    pub span_of_control: Option<f64>,
    pub department_count: Option<f64>,
    pub employee_count: Option<f64>,
    pub reporting_relationships: Option<f64>,

    // Operational
    pub process_complexity: Option<f64>,
    pub decision_latency: Option<f64>,
    pub communication_efficiency: Option<f64>,
    pub resource_utilization: Option<f64>,
    pub task_automation_level: Option<f64>,

    // Cultural
    pub change_readiness: Option<f64>,
    pub collaboration_index: Option<f64>,
    pub innovation_capacity: Option<f64>,
    pub leadership_effectiveness: Option<f64>,
    pub employee_engagement: Option<f64>,

    // Strategic
    pub goal_alignment: Option<f64>,
    pub strategic_agility: Option<f64>,
    pub market_responsiveness: Option<f64>,
    pub competitive_position: Option<f64>,
    pub future_readiness: Option<f64>,

    // Financial
    pub budget_efficiency: Option<f64>,
    pub cost_per_employee: Option<f64>,
    pub revenue_per_employee: Option<f64>,
    pub operational_margin: Option<f64>,
    pub technology_investment: Option<f64>,

    // Technology
    pub digital_maturity: Option<f64>,
    pub system_integration: Option<f64>,
    pub data_quality: Option<f64>,
    pub cybersecurity_level: Option<f64>,
    pub ai_readiness: Option<f64>,

    // Performance
    pub productivity_index: Option<f64>,
    pub quality_metrics: Option<f64>,
    pub customer_satisfaction: Option<f64>,
    pub employee_retention: Option<f64>,
    pub compliance_level: Option<f64>,

    // Risk (pre-inverted: higher = lower exposure)
    pub operational_risk: Option<f64>,
    pub financial_risk: Option<f64>,
    pub talent_risk: Option<f64>,
    pub compliance_risk: Option<f64>,
    pub strategic_risk: Option<f64>,
}

impl OrganizationMetrics {
    /// All fields in declaration order, paired with their names.
    pub fn fields(&self) -> [(&'static str, Option<f64>); 40] {
        [
            ("hierarchy_levels", self.hierarchy_levels),
            ("span_of_control", self.span_of_control),
            ("department_count", self.department_count),
            ("employee_count", self.employee_count),
            ("reporting_relationships", self.reporting_relationships),
            ("process_complexity", self.process_complexity),
            ("decision_latency", self.decision_latency),
            ("communication_efficiency", self.communication_efficiency),
            ("resource_utilization", self.resource_utilization),
            ("task_automation_level", self.task_automation_level),
            ("change_readiness", self.change_readiness),
            ("collaboration_index", self.collaboration_index),
            ("innovation_capacity", self.innovation_capacity),
            ("leadership_effectiveness", self.leadership_effectiveness),
            ("employee_engagement", self.employee_engagement),
            ("goal_alignment", self.goal_alignment),
            ("strategic_agility", self.strategic_agility),
            ("market_responsiveness", self.market_responsiveness),
            ("competitive_position", self.competitive_position),
            ("future_readiness", self.future_readiness),
            ("budget_efficiency", self.budget_efficiency),
            ("cost_per_employee", self.cost_per_employee),
            ("revenue_per_employee", self.revenue_per_employee),
            ("operational_margin", self.operational_margin),
            ("technology_investment", self.technology_investment),
            ("digital_maturity", self.digital_maturity),
            ("system_integration", self.system_integration),
            ("data_quality", self.data_quality),
            ("cybersecurity_level", self.cybersecurity_level),
            ("ai_readiness", self.ai_readiness),
            ("productivity_index", self.productivity_index),
            ("quality_metrics", self.quality_metrics),
            ("customer_satisfaction", self.customer_satisfaction),
            ("employee_retention", self.employee_retention),
            ("compliance_level", self.compliance_level),
            ("operational_risk", self.operational_risk),
            ("financial_risk", self.financial_risk),
            ("talent_risk", self.talent_risk),
            ("compliance_risk", self.compliance_risk),
            ("strategic_risk", self.strategic_risk),
        ]
    }

    /// Fraction of fields that are present, in [0, 1].
    pub fn completeness(&self) -> f64 {
        let fields = self.fields();
        let present = fields.iter().filter(|(_, v)| v.is_some()).count();
        present as f64 / fields.len() as f64
    }

    /// Number of missing fields.
    pub fn missing_count(&self) -> usize {
        self.fields().iter().filter(|(_, v)| v.is_none()).count()
    }
}
