//! Versioned weight tables for the composite index calculators.
//!
//! Weight sums are validated once at configuration load, never at call
//! time; a calculator receiving a validated config cannot hit a zero
//! weight sum unless the config was mutated afterwards (which is a
//! `ComputeError`, i.e. a bug, not a data problem).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{
    DEFAULT_HIERARCHY_PENALTY_MAX, DEFAULT_HIERARCHY_PENALTY_THRESHOLD, WEIGHT_SUM_TOLERANCE,
};
use crate::errors::ConfigError;

/// Common behavior of a per-index weight table.
pub trait IndexWeights {
    /// Name of the index this table belongs to.
    fn index_name(&self) -> &'static str;

    /// All component weights, paired with their names.
    fn components(&self) -> Vec<(&'static str, f64)>;

    /// Validate: each weight in [0, 1], total = 1.0 within tolerance.
    fn validate(&self) -> Result<(), ConfigError> {
        let components = self.components();
        for (name, w) in &components {
            if !w.is_finite() || !(0.0..=1.0).contains(w) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("{}.{}", self.index_name(), name),
                    message: format!("weight must be in [0, 1], got {w}"),
                });
            }
        }
        let sum: f64 = components.iter().map(|(_, w)| w).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::ValidationFailed {
                field: self.index_name().to_string(),
                message: format!("weights must sum to 1.0, got {sum}"),
            });
        }
        Ok(())
    }
}

/// Weights for the structural complexity heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralWeights {
    pub structural: f64,
    pub operational: f64,
    pub cultural: f64,
    pub strategic: f64,
    /// Normalized hierarchy depth beyond which the penalty kicks in.
    pub hierarchy_penalty_threshold: f64,
    /// Maximum penalty subtracted from the overall score.
    pub hierarchy_penalty_max: f64,
}

impl Default for StructuralWeights {
    fn default() -> Self {
        Self {
            structural: 0.35,
            operational: 0.25,
            cultural: 0.20,
            strategic: 0.20,
            hierarchy_penalty_threshold: DEFAULT_HIERARCHY_PENALTY_THRESHOLD,
            hierarchy_penalty_max: DEFAULT_HIERARCHY_PENALTY_MAX,
        }
    }
}

impl IndexWeights for StructuralWeights {
    fn index_name(&self) -> &'static str {
        "structural_complexity"
    }

    fn components(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("structural", self.structural),
            ("operational", self.operational),
            ("cultural", self.cultural),
            ("strategic", self.strategic),
        ]
    }
}

/// Weights for the cultural resilience factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResilienceWeights {
    pub values_alignment: f64,
    pub behavioral_consistency: f64,
    pub adaptability: f64,
    pub cohesion: f64,
    pub innovation_openness: f64,
}

impl Default for ResilienceWeights {
    fn default() -> Self {
        Self {
            values_alignment: 0.30,
            behavioral_consistency: 0.25,
            adaptability: 0.20,
            cohesion: 0.15,
            innovation_openness: 0.10,
        }
    }
}

impl IndexWeights for ResilienceWeights {
    fn index_name(&self) -> &'static str {
        "cultural_resilience"
    }

    fn components(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("values_alignment", self.values_alignment),
            ("behavioral_consistency", self.behavioral_consistency),
            ("adaptability", self.adaptability),
            ("cohesion", self.cohesion),
            ("innovation_openness", self.innovation_openness),
        ]
    }
}

/// Weights for the leadership effectiveness index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadershipWeights {
    pub vision_strategy: f64,
    pub communication: f64,
    pub decision_making: f64,
    pub team_development: f64,
    pub emotional_intelligence: f64,
    pub change_leadership: f64,
}

impl Default for LeadershipWeights {
    fn default() -> Self {
        Self {
            vision_strategy: 0.25,
            communication: 0.20,
            decision_making: 0.20,
            team_development: 0.15,
            emotional_intelligence: 0.10,
            change_leadership: 0.10,
        }
    }
}

impl IndexWeights for LeadershipWeights {
    fn index_name(&self) -> &'static str {
        "leadership_effectiveness"
    }

    fn components(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("vision_strategy", self.vision_strategy),
            ("communication", self.communication),
            ("decision_making", self.decision_making),
            ("team_development", self.team_development),
            ("emotional_intelligence", self.emotional_intelligence),
            ("change_leadership", self.change_leadership),
        ]
    }
}

/// Weights for the change readiness index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadinessWeights {
    pub leadership_support: f64,
    pub culture_adaptability: f64,
    pub communication_effectiveness: f64,
    pub resource_availability: f64,
    pub process_flexibility: f64,
    pub stakeholder_engagement: f64,
}

impl Default for ReadinessWeights {
    fn default() -> Self {
        Self {
            leadership_support: 0.25,
            culture_adaptability: 0.20,
            communication_effectiveness: 0.15,
            resource_availability: 0.15,
            process_flexibility: 0.15,
            stakeholder_engagement: 0.10,
        }
    }
}

impl IndexWeights for ReadinessWeights {
    fn index_name(&self) -> &'static str {
        "change_readiness"
    }

    fn components(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("leadership_support", self.leadership_support),
            ("culture_adaptability", self.culture_adaptability),
            ("communication_effectiveness", self.communication_effectiveness),
            ("resource_availability", self.resource_availability),
            ("process_flexibility", self.process_flexibility),
            ("stakeholder_engagement", self.stakeholder_engagement),
        ]
    }
}

/// Weights for the systemic complexity index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemicWeights {
    pub hierarchy_depth: f64,
    pub interdependence: f64,
    pub process_layering: f64,
    pub decision_latency: f64,
}

impl Default for SystemicWeights {
    fn default() -> Self {
        Self {
            hierarchy_depth: 0.30,
            interdependence: 0.25,
            process_layering: 0.25,
            decision_latency: 0.20,
        }
    }
}

impl IndexWeights for SystemicWeights {
    fn index_name(&self) -> &'static str {
        "systemic_complexity"
    }

    fn components(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("hierarchy_depth", self.hierarchy_depth),
            ("interdependence", self.interdependence),
            ("process_layering", self.process_layering),
            ("decision_latency", self.decision_latency),
        ]
    }
}

/// Maturity tier thresholds over the adjusted overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub transforming: f64,
    pub growing: f64,
    pub developing: f64,
    pub establishing: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            transforming: 0.80,
            growing: 0.65,
            developing: 0.50,
            establishing: 0.35,
        }
    }
}

impl TierThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        let ordered = self.transforming > self.growing
            && self.growing > self.developing
            && self.developing > self.establishing
            && self.establishing > 0.0
            && self.transforming <= 1.0;
        if !ordered {
            return Err(ConfigError::ValidationFailed {
                field: "tiers".to_string(),
                message: "thresholds must be strictly descending within (0, 1]".to_string(),
            });
        }
        Ok(())
    }
}

/// Peer score distribution used for percentile ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeerDistribution {
    pub mean: f64,
    pub std_dev: f64,
}

impl Default for PeerDistribution {
    fn default() -> Self {
        Self {
            mean: 0.58,
            std_dev: 0.18,
        }
    }
}

/// Built-in category mapping used when a question has no specific table.
const DEFAULT_CATEGORY_TABLE: &[(&str, f64)] = &[
    ("excellent", 1.0),
    ("very good", 0.9),
    ("good", 0.8),
    ("fair", 0.6),
    ("average", 0.6),
    ("poor", 0.4),
    ("very poor", 0.2),
];

/// All scoring configuration: versioned weight tables, tier thresholds,
/// peer distribution, and categorical lookup tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Version stamped onto every computed index for reproducibility.
    pub version: String,
    pub structural: StructuralWeights,
    pub resilience: ResilienceWeights,
    pub leadership: LeadershipWeights,
    pub readiness: ReadinessWeights,
    pub systemic: SystemicWeights,
    pub tiers: TierThresholds,
    pub peer: PeerDistribution,
    /// Per-question categorical tables: question id -> category -> value.
    pub categories: BTreeMap<String, BTreeMap<String, f64>>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            structural: StructuralWeights::default(),
            resilience: ResilienceWeights::default(),
            leadership: LeadershipWeights::default(),
            readiness: ReadinessWeights::default(),
            systemic: SystemicWeights::default(),
            tiers: TierThresholds::default(),
            peer: PeerDistribution::default(),
            categories: BTreeMap::new(),
        }
    }
}

impl ScoringConfig {
    /// Resolve a categorical answer for a question. Checks the
    /// question-specific table first, then the built-in default table
    /// (case-insensitive). `None` means the category is unmapped.
    pub fn category_value(&self, question_id: &str, category: &str) -> Option<f64> {
        if let Some(table) = self.categories.get(question_id) {
            if let Some(v) = table.get(category) {
                return Some(*v);
            }
        }
        let lowered = category.to_lowercase();
        DEFAULT_CATEGORY_TABLE
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, v)| *v)
    }

    /// Validate all weight tables and thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.structural.validate()?;
        self.resilience.validate()?;
        self.leadership.validate()?;
        self.readiness.validate()?;
        self.systemic.validate()?;
        self.tiers.validate()?;

        let t = self.structural.hierarchy_penalty_threshold;
        if !t.is_finite() || !(0.0..1.0).contains(&t) {
            return Err(ConfigError::ValidationFailed {
                field: "structural.hierarchy_penalty_threshold".to_string(),
                message: format!("must be in [0, 1), got {t}"),
            });
        }
        let m = self.structural.hierarchy_penalty_max;
        if !m.is_finite() || !(0.0..=1.0).contains(&m) {
            return Err(ConfigError::ValidationFailed {
                field: "structural.hierarchy_penalty_max".to_string(),
                message: format!("must be in [0, 1], got {m}"),
            });
        }
        if !self.peer.std_dev.is_finite() || self.peer.std_dev <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "peer.std_dev".to_string(),
                message: "must be positive".to_string(),
            });
        }
        for (question, table) in &self.categories {
            for (category, value) in table {
                if !value.is_finite() || !(0.0..=1.0).contains(value) {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("categories.{question}.{category}"),
                        message: format!("category value must be in [0, 1], got {value}"),
                    });
                }
            }
        }
        Ok(())
    }
}
