//! ROI engine — four calculation modes over validated financial inputs.
//!
//! Validation fails fast: a non-positive time horizon or a discount
//! rate below -1 is rejected before any computation, because incorrect
//! financial projections are high-stakes. An iteration count below 1 is
//! the one exception — it defaults to 1 with a warning. No state is
//! shared between invocations.

mod cashflow;
mod monte_carlo;
mod sensitivity;
pub mod types;

pub use types::{
    CalculationMode, DistributionStats, RoiAssumptions, RoiInputs, RoiRequest, RoiResult,
    SweepParameter, SweepPoint, SweepSpec,
};

use realign_core::config::RoiConfig;
use realign_core::errors::{EngineError, InputError};
use realign_core::traits::{Cancellable, EntropySource, RandomSource, SeededSource};
use realign_core::warnings::DataWarning;

use cashflow::{cost_base, detailed_projection, irr, simple_projection};

/// The ROI engine. Holds only a reference to validated configuration;
/// every calculation is a pure function of its arguments.
pub struct RoiEngine<'a> {
    config: &'a RoiConfig,
}

impl<'a> RoiEngine<'a> {
    pub fn new(config: &'a RoiConfig) -> Self {
        Self { config }
    }

    /// Run the mode the request asks for.
    ///
    /// `cancel` is only consulted by Monte Carlo runs, between trial
    /// batches; the other modes complete in microseconds.
    pub fn calculate(
        &self,
        inputs: &RoiInputs,
        request: &RoiRequest,
        cancel: Option<&dyn Cancellable>,
    ) -> Result<RoiResult, EngineError> {
        inputs.validate()?;
        let (assumptions, mut warnings) = self.resolve_assumptions(request)?;
        let base = cost_base(inputs.implementation_cost, inputs.baseline_annual_cost)?;
        let annual_benefit =
            inputs.annual_savings() * assumptions.savings_realization * assumptions.adoption_rate;

        let result = match request.mode {
            CalculationMode::Simple => {
                let p = simple_projection(
                    inputs.implementation_cost,
                    annual_benefit,
                    assumptions.time_horizon_months,
                    base,
                );
                RoiResult {
                    mode: request.mode,
                    roi_pct: p.roi_pct,
                    payback_months: p.payback_months,
                    npv: None,
                    irr: None,
                    annual_net_benefit: annual_benefit,
                    distribution: None,
                    stats: None,
                    sweep: None,
                    warnings,
                }
            }
            CalculationMode::Detailed => {
                let p = detailed_projection(
                    inputs.implementation_cost,
                    annual_benefit,
                    assumptions.discount_rate,
                    assumptions.time_horizon_months,
                    base,
                );
                RoiResult {
                    mode: request.mode,
                    roi_pct: p.roi_pct,
                    payback_months: p.payback_months,
                    npv: Some(p.npv),
                    irr: irr(
                        inputs.implementation_cost,
                        annual_benefit,
                        assumptions.time_horizon_months,
                    ),
                    annual_net_benefit: annual_benefit,
                    distribution: None,
                    stats: None,
                    sweep: None,
                    warnings,
                }
            }
            CalculationMode::MonteCarlo => {
                let iterations = match request.iterations {
                    Some(0) => {
                        warnings.push(DataWarning::IterationsClamped { requested: 0 });
                        1
                    }
                    Some(n) => n,
                    None => self.config.default_iterations,
                };
                let source: Box<dyn RandomSource> = match request.seed {
                    Some(seed) => Box::new(SeededSource::new(seed)),
                    None => Box::new(EntropySource::new()),
                };
                let mut result = self.monte_carlo(
                    inputs,
                    &assumptions,
                    iterations,
                    source.as_ref(),
                    cancel,
                )?;
                result.warnings.append(&mut warnings);
                result
            }
            CalculationMode::Sensitivity => {
                let spec = request.sweep.ok_or(InputError::MissingSweepSpec)?;
                let points = sensitivity::run_sweep(inputs, &assumptions, &spec)?;
                let p = detailed_projection(
                    inputs.implementation_cost,
                    annual_benefit,
                    assumptions.discount_rate,
                    assumptions.time_horizon_months,
                    base,
                );
                RoiResult {
                    mode: request.mode,
                    roi_pct: p.roi_pct,
                    payback_months: p.payback_months,
                    npv: Some(p.npv),
                    irr: None,
                    annual_net_benefit: annual_benefit,
                    distribution: None,
                    stats: None,
                    sweep: Some(points),
                    warnings,
                }
            }
        };

        tracing::debug!(
            mode = request.mode.name(),
            roi_pct = result.roi_pct,
            "ROI calculation completed"
        );
        Ok(result)
    }

    /// Run Monte Carlo with an explicitly injected random source.
    /// Tests supply a seeded source and assert tolerance bands;
    /// `calculate` wires in a seeded or entropy source per the request.
    pub fn monte_carlo(
        &self,
        inputs: &RoiInputs,
        assumptions: &RoiAssumptions,
        iterations: u32,
        rng: &dyn RandomSource,
        cancel: Option<&dyn Cancellable>,
    ) -> Result<RoiResult, EngineError> {
        inputs.validate()?;
        let iterations = iterations.max(1);
        let distribution =
            monte_carlo::run_trials(self.config, inputs, assumptions, iterations, rng, cancel)?;
        let stats = monte_carlo::distribution_stats(&distribution);

        let base = cost_base(inputs.implementation_cost, inputs.baseline_annual_cost)?;
        let annual_benefit =
            inputs.annual_savings() * assumptions.savings_realization * assumptions.adoption_rate;
        let point = detailed_projection(
            inputs.implementation_cost,
            annual_benefit,
            assumptions.discount_rate,
            assumptions.time_horizon_months,
            base,
        );

        Ok(RoiResult {
            mode: CalculationMode::MonteCarlo,
            roi_pct: stats.mean,
            payback_months: point.payback_months,
            npv: Some(point.npv),
            irr: None,
            annual_net_benefit: annual_benefit,
            distribution: Some(distribution),
            stats: Some(stats),
            sweep: None,
            warnings: Vec::new(),
        })
    }

    /// Merge request overrides onto configured defaults, validating
    /// the financial parameters.
    fn resolve_assumptions(
        &self,
        request: &RoiRequest,
    ) -> Result<(RoiAssumptions, Vec<DataWarning>), EngineError> {
        let warnings = Vec::new();

        let discount_rate = request
            .discount_rate
            .unwrap_or(self.config.default_discount_rate);
        if !discount_rate.is_finite() {
            return Err(InputError::NonFiniteNumber {
                field: "discount_rate".to_string(),
                value: discount_rate,
            }
            .into());
        }
        if discount_rate < -1.0 {
            return Err(InputError::DiscountRateBelowFloor {
                value: discount_rate,
            }
            .into());
        }

        let time_horizon_months = request
            .time_horizon_months
            .unwrap_or(self.config.default_time_horizon_years as i64 * 12);
        if time_horizon_months <= 0 {
            return Err(InputError::NonPositiveTimeHorizon {
                months: time_horizon_months,
            }
            .into());
        }

        let savings_realization = resolve_rate(
            &request.assumptions,
            "savings_realization",
            self.config.savings_realization,
        )?;
        let adoption_rate = resolve_rate(
            &request.assumptions,
            "adoption_rate",
            self.config.adoption_rate,
        )?;

        Ok((
            RoiAssumptions {
                discount_rate,
                time_horizon_months,
                savings_realization,
                adoption_rate,
            },
            warnings,
        ))
    }
}

/// Resolve a (0, 1] rate from the request's assumption map, falling
/// back to the configured default.
fn resolve_rate(
    assumptions: &std::collections::BTreeMap<String, f64>,
    key: &str,
    default: f64,
) -> Result<f64, EngineError> {
    let value = assumptions.get(key).copied().unwrap_or(default);
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(InputError::NonFiniteNumber {
            field: key.to_string(),
            value,
        }
        .into());
    }
    Ok(value)
}
