//! ROI engine configuration: default assumptions and Monte Carlo
//! perturbation shapes.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ADOPTION_RATE, DEFAULT_DISCOUNT_RATE, DEFAULT_ITERATIONS, DEFAULT_SAVINGS_REALIZATION,
    DEFAULT_TIME_HORIZON_YEARS, MONTE_CARLO_BATCH_SIZE,
};
use crate::errors::ConfigError;

/// Shape of the random deviation applied to an assumption per trial.
///
/// The shape is configuration, not code: simulations must not hard-code
/// a single distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum DeviationSpec {
    /// Gaussian deviation with the given standard deviation.
    Normal { std_dev: f64 },
    /// Uniform deviation in [-half_width, +half_width].
    Uniform { half_width: f64 },
    /// Symmetric triangular deviation with the given spread (mode 0).
    Triangular { spread: f64 },
}

impl DeviationSpec {
    fn scale(&self) -> f64 {
        match self {
            Self::Normal { std_dev } => *std_dev,
            Self::Uniform { half_width } => *half_width,
            Self::Triangular { spread } => *spread,
        }
    }
}

/// A bounded perturbation: a deviation shape plus a hard clamp so a
/// single extreme draw cannot produce a nonsensical assumption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Perturbation {
    #[serde(flatten)]
    pub spec: DeviationSpec,
    /// Maximum absolute deviation after sampling.
    pub bound: f64,
}

impl Perturbation {
    pub fn normal(std_dev: f64, bound: f64) -> Self {
        Self {
            spec: DeviationSpec::Normal { std_dev },
            bound,
        }
    }

    fn validate(&self, field: &str) -> Result<(), ConfigError> {
        let scale = self.spec.scale();
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: format!("{field}.shape"),
                message: format!("deviation scale must be positive, got {scale}"),
            });
        }
        if !self.bound.is_finite() || self.bound <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: format!("{field}.bound"),
                message: format!("bound must be positive, got {}", self.bound),
            });
        }
        Ok(())
    }
}

/// Per-assumption perturbations for Monte Carlo trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerturbationConfig {
    /// Relative deviation applied to the cost delta.
    pub cost_delta: Perturbation,
    /// Deviation applied to the adoption rate.
    pub adoption_rate: Perturbation,
    /// Deviation applied to the savings realization ratio.
    pub savings_realization: Perturbation,
}

impl Default for PerturbationConfig {
    fn default() -> Self {
        Self {
            cost_delta: Perturbation::normal(0.10, 0.30),
            adoption_rate: Perturbation::normal(0.05, 0.15),
            savings_realization: Perturbation::normal(0.10, 0.30),
        }
    }
}

/// ROI engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiConfig {
    /// Monte Carlo iterations when the request does not specify one.
    pub default_iterations: u32,
    /// Annual discount rate when the request does not specify one.
    pub default_discount_rate: f64,
    /// Projection horizon in years when the request does not specify one.
    pub default_time_horizon_years: u32,
    /// Fraction of projected savings assumed to materialize.
    pub savings_realization: f64,
    /// Fraction of the proposed change assumed to be adopted.
    pub adoption_rate: f64,
    /// Trials per batch between cancellation checks.
    pub batch_size: u32,
    pub perturbations: PerturbationConfig,
}

impl Default for RoiConfig {
    fn default() -> Self {
        Self {
            default_iterations: DEFAULT_ITERATIONS,
            default_discount_rate: DEFAULT_DISCOUNT_RATE,
            default_time_horizon_years: DEFAULT_TIME_HORIZON_YEARS,
            savings_realization: DEFAULT_SAVINGS_REALIZATION,
            adoption_rate: DEFAULT_ADOPTION_RATE,
            batch_size: MONTE_CARLO_BATCH_SIZE,
            perturbations: PerturbationConfig::default(),
        }
    }
}

impl RoiConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_time_horizon_years == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "roi.default_time_horizon_years".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !self.default_discount_rate.is_finite() || self.default_discount_rate < -1.0 {
            return Err(ConfigError::ValidationFailed {
                field: "roi.default_discount_rate".to_string(),
                message: format!("must be >= -1.0, got {}", self.default_discount_rate),
            });
        }
        for (field, value) in [
            ("roi.savings_realization", self.savings_realization),
            ("roi.adoption_rate", self.adoption_rate),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) || value == 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("must be in (0, 1], got {value}"),
                });
            }
        }
        if self.batch_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "roi.batch_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        self.perturbations.cost_delta.validate("roi.perturbations.cost_delta")?;
        self.perturbations
            .adoption_rate
            .validate("roi.perturbations.adoption_rate")?;
        self.perturbations
            .savings_realization
            .validate("roi.perturbations.savings_realization")?;
        Ok(())
    }
}
