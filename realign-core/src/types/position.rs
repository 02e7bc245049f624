//! Position and scenario snapshot types.
//!
//! Positions form an arena indexed by id; `reports_to` is a weak
//! reference resolved by lookup, never an owning link. Deleting a
//! position does not cascade to its reports — that is a caller concern.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::InputError;

/// Identifier of a position within a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionId(pub String);

impl PositionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PositionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single role/seat in an organization snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: PositionId,
    pub role_title: String,
    /// Full-time-equivalent headcount, >= 0.
    pub fte: f64,
    /// Fully loaded annual cost, >= 0 when known. Positions lacking
    /// cost data still diff normally but lower the comparison's
    /// confidence score.
    #[serde(default)]
    pub annual_cost: Option<f64>,
    /// Weak reference to the parent position, if any.
    #[serde(default)]
    pub reports_to: Option<PositionId>,
    /// Hierarchy level, 1 = top.
    #[serde(default = "default_level")]
    pub level: u32,
}

fn default_level() -> u32 {
    1
}

impl Position {
    /// Validate numeric invariants. Negative or non-finite FTE/cost is
    /// an input error, not something to clamp — it indicates corrupted
    /// position data.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.fte.is_finite() || self.fte < 0.0 {
            return Err(InputError::NegativeFte {
                position_id: self.id.to_string(),
                value: self.fte,
            });
        }
        if let Some(cost) = self.annual_cost {
            if !cost.is_finite() || cost < 0.0 {
                return Err(InputError::NegativeCost {
                    position_id: self.id.to_string(),
                    value: cost,
                });
            }
        }
        Ok(())
    }

    /// Whether this position carries cost data.
    pub fn has_cost_data(&self) -> bool {
        self.annual_cost.is_some()
    }
}

/// One organizational structure at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScenarioSnapshot {
    pub positions: Vec<Position>,
}

impl ScenarioSnapshot {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// Sum of annual costs across all positions. Positions lacking
    /// cost data contribute zero; confidence scoring accounts for them
    /// separately.
    pub fn total_cost(&self) -> f64 {
        self.positions
            .iter()
            .filter_map(|p| p.annual_cost)
            .sum()
    }

    /// Sum of FTE across all positions.
    pub fn total_fte(&self) -> f64 {
        self.positions.iter().map(|p| p.fte).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Validate every position in the snapshot; fails on the first
    /// invalid one.
    pub fn validate(&self) -> Result<(), InputError> {
        for position in &self.positions {
            position.validate()?;
        }
        Ok(())
    }
}

/// A paired baseline/variant snapshot for what-if comparison.
///
/// Pure value type: comparisons are idempotent functions of the two
/// snapshots, and the engine holds no lifecycle state for scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub baseline: ScenarioSnapshot,
    pub variant: ScenarioSnapshot,
}

impl Scenario {
    pub fn new(baseline: ScenarioSnapshot, variant: ScenarioSnapshot) -> Self {
        Self { baseline, variant }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(id: &str, cost: f64) -> Position {
        Position {
            id: PositionId::from(id),
            role_title: "Analyst".to_string(),
            fte: 1.0,
            annual_cost: Some(cost),
            reports_to: None,
            level: 2,
        }
    }

    #[test]
    fn snapshot_totals() {
        let snap = ScenarioSnapshot::new(vec![position("a", 90_000.0), position("b", 110_000.0)]);
        assert_eq!(snap.total_cost(), 200_000.0);
        assert_eq!(snap.total_fte(), 2.0);
    }

    #[test]
    fn negative_fte_is_rejected() {
        let mut p = position("a", 90_000.0);
        p.fte = -0.5;
        let err = p.validate().unwrap_err();
        assert!(matches!(err, InputError::NegativeFte { .. }));
    }

    #[test]
    fn negative_cost_is_rejected() {
        let mut p = position("a", 90_000.0);
        p.annual_cost = Some(-1.0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn nan_cost_is_rejected() {
        let mut p = position("a", 90_000.0);
        p.annual_cost = Some(f64::NAN);
        assert!(p.validate().is_err());
    }

    #[test]
    fn missing_cost_is_valid_but_flagged() {
        let mut p = position("a", 90_000.0);
        p.annual_cost = None;
        assert!(p.validate().is_ok());
        assert!(!p.has_cost_data());
    }
}
