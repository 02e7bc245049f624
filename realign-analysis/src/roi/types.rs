//! ROI request/result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use realign_core::errors::InputError;
use realign_core::warnings::DataWarning;

use crate::scenario::ComparisonResult;

/// Calculation mode for an ROI run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// No time value of money.
    Simple,
    /// Discounted cashflow with NPV and interpolated payback.
    Detailed,
    /// Randomized trials over perturbed assumptions.
    MonteCarlo,
    /// One parameter swept over a range, everything else fixed.
    Sensitivity,
}

impl CalculationMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Detailed => "detailed",
            Self::MonteCarlo => "monte_carlo",
            Self::Sensitivity => "sensitivity",
        }
    }
}

/// The assumption a sensitivity run sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameter {
    DiscountRate,
    SavingsRealization,
    AdoptionRate,
    ImplementationCost,
}

impl SweepParameter {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DiscountRate => "discount_rate",
            Self::SavingsRealization => "savings_realization",
            Self::AdoptionRate => "adoption_rate",
            Self::ImplementationCost => "implementation_cost",
        }
    }
}

/// Range specification for a sensitivity sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepSpec {
    pub parameter: SweepParameter,
    pub min: f64,
    pub max: f64,
    pub steps: u32,
}

impl SweepSpec {
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(InputError::InvalidSweepRange {
                parameter: self.parameter.name().to_string(),
            });
        }
        if self.steps < 2 {
            return Err(InputError::TooFewSweepSteps {
                parameter: self.parameter.name().to_string(),
                steps: self.steps,
            });
        }
        Ok(())
    }
}

/// A caller's ROI calculation request. Unset fields fall back to the
/// engine's configured defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiRequest {
    pub mode: CalculationMode,
    #[serde(default)]
    pub discount_rate: Option<f64>,
    #[serde(default)]
    pub time_horizon_months: Option<i64>,
    #[serde(default)]
    pub iterations: Option<u32>,
    /// Deterministic seed for Monte Carlo; entropy-seeded when unset.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub sweep: Option<SweepSpec>,
    /// Named assumption overrides ("savings_realization",
    /// "adoption_rate"). Unknown keys are ignored.
    #[serde(default)]
    pub assumptions: BTreeMap<String, f64>,
}

impl RoiRequest {
    pub fn new(mode: CalculationMode) -> Self {
        Self {
            mode,
            discount_rate: None,
            time_horizon_months: None,
            iterations: None,
            seed: None,
            sweep: None,
            assumptions: BTreeMap::new(),
        }
    }
}

/// Financial state of a proposed change, usually derived from a
/// scenario comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub baseline_annual_cost: f64,
    pub variant_annual_cost: f64,
    /// One-time cost of implementing the change.
    pub implementation_cost: f64,
}

impl RoiInputs {
    /// Build inputs from a comparison's cost summary plus a caller
    /// supplied implementation cost.
    pub fn from_comparison(comparison: &ComparisonResult, implementation_cost: f64) -> Self {
        Self {
            baseline_annual_cost: comparison.summary.cost_summary.baseline_cost,
            variant_annual_cost: comparison.summary.cost_summary.variant_cost,
            implementation_cost,
        }
    }

    /// Annual gross savings (positive when the variant is cheaper).
    pub fn annual_savings(&self) -> f64 {
        self.baseline_annual_cost - self.variant_annual_cost
    }

    pub fn validate(&self) -> Result<(), InputError> {
        for (field, value) in [
            ("baseline_annual_cost", self.baseline_annual_cost),
            ("variant_annual_cost", self.variant_annual_cost),
            ("implementation_cost", self.implementation_cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(InputError::NonFiniteNumber {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Assumptions resolved from config + request overrides, as used by a
/// single projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiAssumptions {
    pub discount_rate: f64,
    pub time_horizon_months: i64,
    pub savings_realization: f64,
    pub adoption_rate: f64,
}

/// Summary statistics over a Monte Carlo ROI% distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionStats {
    pub mean: f64,
    pub std_dev: f64,
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

/// A single point of a sensitivity sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub value: f64,
    pub roi_pct: f64,
}

/// Result of an ROI run. Optional sections are populated per mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub mode: CalculationMode,
    /// Point-estimate ROI percentage (mean ROI for Monte Carlo).
    pub roi_pct: f64,
    /// Months until cumulative benefit covers the implementation cost;
    /// `None` when the change never pays back within the horizon.
    pub payback_months: Option<f64>,
    /// Net present value (Detailed and Monte Carlo modes).
    pub npv: Option<f64>,
    /// Internal rate of return (Detailed mode).
    pub irr: Option<f64>,
    /// Net annual benefit after realization and adoption factors.
    pub annual_net_benefit: f64,
    /// Sorted per-trial ROI% values (Monte Carlo mode).
    pub distribution: Option<Vec<f64>>,
    pub stats: Option<DistributionStats>,
    /// Sweep results (Sensitivity mode).
    pub sweep: Option<Vec<SweepPoint>>,
    pub warnings: Vec<DataWarning>,
}
