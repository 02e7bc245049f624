//! Sensitivity analysis: sweep one assumption, hold the rest fixed.

use realign_core::errors::{EngineError, InputError};

use super::cashflow::{cost_base, detailed_projection};
use super::types::{RoiAssumptions, RoiInputs, SweepParameter, SweepPoint, SweepSpec};

/// Evaluate ROI% across the sweep range, everything else fixed.
/// Shows which assumption most influences the outcome.
pub(crate) fn run_sweep(
    inputs: &RoiInputs,
    assumptions: &RoiAssumptions,
    spec: &SweepSpec,
) -> Result<Vec<SweepPoint>, EngineError> {
    spec.validate()?;
    if spec.parameter == SweepParameter::DiscountRate && spec.min < -1.0 {
        return Err(InputError::DiscountRateBelowFloor { value: spec.min }.into());
    }
    if spec.parameter != SweepParameter::DiscountRate && spec.min < 0.0 {
        return Err(InputError::InvalidSweepRange {
            parameter: spec.parameter.name().to_string(),
        }
        .into());
    }

    let mut points = Vec::with_capacity(spec.steps as usize);
    for step in 0..spec.steps {
        let value = spec.min + (spec.max - spec.min) * step as f64 / (spec.steps - 1) as f64;
        let roi_pct = roi_at(inputs, assumptions, spec.parameter, value)?;
        points.push(SweepPoint { value, roi_pct });
    }
    Ok(points)
}

fn roi_at(
    inputs: &RoiInputs,
    assumptions: &RoiAssumptions,
    parameter: SweepParameter,
    value: f64,
) -> Result<f64, EngineError> {
    let mut assumptions = *assumptions;
    let mut implementation_cost = inputs.implementation_cost;

    match parameter {
        SweepParameter::DiscountRate => assumptions.discount_rate = value,
        SweepParameter::SavingsRealization => {
            assumptions.savings_realization = value.clamp(0.0, 1.0)
        }
        SweepParameter::AdoptionRate => assumptions.adoption_rate = value.clamp(0.0, 1.0),
        SweepParameter::ImplementationCost => implementation_cost = value,
    }

    let base = cost_base(implementation_cost, inputs.baseline_annual_cost)?;
    let annual_benefit =
        inputs.annual_savings() * assumptions.savings_realization * assumptions.adoption_rate;
    Ok(detailed_projection(
        implementation_cost,
        annual_benefit,
        assumptions.discount_rate,
        assumptions.time_horizon_months,
        base,
    )
    .roi_pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> RoiInputs {
        RoiInputs {
            baseline_annual_cost: 1_000_000.0,
            variant_annual_cost: 850_000.0,
            implementation_cost: 120_000.0,
        }
    }

    fn assumptions() -> RoiAssumptions {
        RoiAssumptions {
            discount_rate: 0.08,
            time_horizon_months: 48,
            savings_realization: 0.9,
            adoption_rate: 0.85,
        }
    }

    #[test]
    fn sweep_produces_requested_step_count_over_the_range() {
        let spec = SweepSpec {
            parameter: SweepParameter::DiscountRate,
            min: 0.02,
            max: 0.12,
            steps: 6,
        };
        let points = run_sweep(&inputs(), &assumptions(), &spec).unwrap();
        assert_eq!(points.len(), 6);
        assert!((points[0].value - 0.02).abs() < 1e-12);
        assert!((points[5].value - 0.12).abs() < 1e-12);
    }

    #[test]
    fn roi_decreases_as_discount_rate_rises() {
        let spec = SweepSpec {
            parameter: SweepParameter::DiscountRate,
            min: 0.0,
            max: 0.15,
            steps: 4,
        };
        let points = run_sweep(&inputs(), &assumptions(), &spec).unwrap();
        for pair in points.windows(2) {
            assert!(pair[1].roi_pct < pair[0].roi_pct);
        }
    }

    #[test]
    fn roi_increases_with_savings_realization() {
        let spec = SweepSpec {
            parameter: SweepParameter::SavingsRealization,
            min: 0.6,
            max: 1.0,
            steps: 5,
        };
        let points = run_sweep(&inputs(), &assumptions(), &spec).unwrap();
        for pair in points.windows(2) {
            assert!(pair[1].roi_pct > pair[0].roi_pct);
        }
    }

    #[test]
    fn inverted_range_is_rejected() {
        let spec = SweepSpec {
            parameter: SweepParameter::AdoptionRate,
            min: 0.9,
            max: 0.6,
            steps: 4,
        };
        assert!(run_sweep(&inputs(), &assumptions(), &spec).is_err());
    }

    #[test]
    fn single_step_sweep_is_rejected() {
        let spec = SweepSpec {
            parameter: SweepParameter::DiscountRate,
            min: 0.0,
            max: 0.1,
            steps: 1,
        };
        assert!(run_sweep(&inputs(), &assumptions(), &spec).is_err());
    }
}
