//! Monte Carlo ROI simulation.
//!
//! Trials are embarrassingly parallel and run on the rayon pool in
//! batches, with cooperative cancellation checked between batches.
//! Randomness comes from an injected [`RandomSource`] whose samples are
//! a pure function of (seed, trial, draw), so parallel scheduling never
//! affects the numbers; aggregation sorts the distribution before
//! computing percentiles, making the statistics reproducible even
//! though trial completion order is not.

use rayon::prelude::*;

use realign_core::config::{DeviationSpec, Perturbation, RoiConfig};
use realign_core::errors::EngineError;
use realign_core::traits::{Cancellable, RandomSource};
use statrs::distribution::{ContinuousCDF, Normal, Triangular};

use super::cashflow::{cost_base, detailed_projection};
use super::types::{DistributionStats, RoiAssumptions, RoiInputs};

/// Run `iterations` trials and return the sorted ROI% distribution.
pub(crate) fn run_trials(
    config: &RoiConfig,
    inputs: &RoiInputs,
    assumptions: &RoiAssumptions,
    iterations: u32,
    rng: &dyn RandomSource,
    cancel: Option<&dyn Cancellable>,
) -> Result<Vec<f64>, EngineError> {
    let base = cost_base(inputs.implementation_cost, inputs.baseline_annual_cost)?;
    let annual_savings = inputs.annual_savings();
    let perturbations = &config.perturbations;

    let mut distribution = Vec::with_capacity(iterations as usize);
    let batch_size = config.batch_size.max(1);
    let mut start = 0u32;

    while start < iterations {
        if let Some(token) = cancel {
            if token.is_cancelled() {
                tracing::warn!(completed = start, iterations, "Monte Carlo run cancelled");
                return Err(EngineError::Cancelled);
            }
        }
        let end = (start + batch_size).min(iterations);
        let mut batch: Vec<f64> = (start..end)
            .into_par_iter()
            .map(|trial| {
                run_trial(
                    trial as u64,
                    annual_savings,
                    inputs.implementation_cost,
                    base,
                    assumptions,
                    perturbations.cost_delta,
                    perturbations.adoption_rate,
                    perturbations.savings_realization,
                    rng,
                )
            })
            .collect();
        distribution.append(&mut batch);
        start = end;
    }

    // Deterministic aggregation: trial order is scheduling-dependent,
    // percentile math is not.
    distribution.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Ok(distribution)
}

#[allow(clippy::too_many_arguments)]
fn run_trial(
    trial: u64,
    annual_savings: f64,
    implementation_cost: f64,
    base: f64,
    assumptions: &RoiAssumptions,
    cost_perturbation: Perturbation,
    adoption_perturbation: Perturbation,
    savings_perturbation: Perturbation,
    rng: &dyn RandomSource,
) -> f64 {
    let cost_dev = sample_deviation(&cost_perturbation, rng.uniform(trial, 0));
    let adoption_dev = sample_deviation(&adoption_perturbation, rng.uniform(trial, 1));
    let savings_dev = sample_deviation(&savings_perturbation, rng.uniform(trial, 2));

    let savings = annual_savings * (1.0 + cost_dev);
    let adoption = (assumptions.adoption_rate + adoption_dev).clamp(0.0, 1.0);
    let realization = (assumptions.savings_realization + savings_dev).clamp(0.0, 1.0);
    let annual_benefit = savings * adoption * realization;

    detailed_projection(
        implementation_cost,
        annual_benefit,
        assumptions.discount_rate,
        assumptions.time_horizon_months,
        base,
    )
    .roi_pct
}

/// Map a uniform sample through the configured deviation shape, then
/// clamp to the perturbation's bound.
fn sample_deviation(perturbation: &Perturbation, u: f64) -> f64 {
    // Inverse CDFs blow up at the endpoints.
    let u = u.clamp(1e-12, 1.0 - 1e-12);
    let deviation = match perturbation.spec {
        DeviationSpec::Normal { std_dev } => match Normal::new(0.0, std_dev) {
            Ok(dist) => dist.inverse_cdf(u),
            Err(_) => 0.0,
        },
        DeviationSpec::Uniform { half_width } => (2.0 * u - 1.0) * half_width,
        DeviationSpec::Triangular { spread } => {
            match Triangular::new(-spread, spread, 0.0) {
                Ok(dist) => dist.inverse_cdf(u),
                Err(_) => 0.0,
            }
        }
    };
    let deviation = if deviation.is_finite() { deviation } else { 0.0 };
    deviation.clamp(-perturbation.bound, perturbation.bound)
}

/// Summary statistics over a sorted distribution.
pub(crate) fn distribution_stats(sorted: &[f64]) -> DistributionStats {
    if sorted.is_empty() {
        return DistributionStats {
            mean: 0.0,
            std_dev: 0.0,
            p10: 0.0,
            p50: 0.0,
            p90: 0.0,
        };
    }
    let n = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    DistributionStats {
        mean,
        std_dev: variance.sqrt(),
        p10: percentile(sorted, 10),
        p50: percentile(sorted, 50),
        p90: percentile(sorted, 90),
    }
}

/// The k-th percentile of a sorted slice.
fn percentile(sorted: &[f64], k: u32) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = (k as f64 / 100.0 * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use realign_core::traits::SeededSource;

    fn inputs() -> RoiInputs {
        RoiInputs {
            baseline_annual_cost: 1_000_000.0,
            variant_annual_cost: 820_000.0,
            implementation_cost: 150_000.0,
        }
    }

    fn assumptions() -> RoiAssumptions {
        RoiAssumptions {
            discount_rate: 0.08,
            time_horizon_months: 60,
            savings_realization: 0.90,
            adoption_rate: 0.85,
        }
    }

    #[test]
    fn same_seed_reproduces_the_distribution() {
        let config = RoiConfig::default();
        let rng = SeededSource::new(1234);
        let a = run_trials(&config, &inputs(), &assumptions(), 2000, &rng, None).unwrap();
        let b = run_trials(&config, &inputs(), &assumptions(), 2000, &rng, None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ordering_invariant_p10_p50_p90() {
        let config = RoiConfig::default();
        let rng = SeededSource::new(7);
        let dist = run_trials(&config, &inputs(), &assumptions(), 3000, &rng, None).unwrap();
        let stats = distribution_stats(&dist);
        assert!(stats.p10 <= stats.p50);
        assert!(stats.p50 <= stats.p90);
        assert!(stats.std_dev > 0.0);
    }

    #[test]
    fn cancellation_between_batches_surfaces() {
        use realign_core::traits::{Cancellable, CancellationToken};
        let config = RoiConfig::default();
        let rng = SeededSource::new(7);
        let token = CancellationToken::new();
        token.cancel();
        let result = run_trials(
            &config,
            &inputs(),
            &assumptions(),
            10_000,
            &rng,
            Some(&token),
        );
        assert!(matches!(result, Err(EngineError::Cancelled)));
    }

    #[test]
    fn uniform_deviation_respects_bounds() {
        let p = Perturbation {
            spec: DeviationSpec::Uniform { half_width: 0.2 },
            bound: 0.2,
        };
        for i in 0..100 {
            let u = i as f64 / 100.0;
            let d = sample_deviation(&p, u);
            assert!(d.abs() <= 0.2 + 1e-12);
        }
    }

    #[test]
    fn normal_deviation_is_clamped_to_bound() {
        let p = Perturbation::normal(0.1, 0.15);
        let extreme = sample_deviation(&p, 0.9999999);
        assert!(extreme <= 0.15);
        let other_tail = sample_deviation(&p, 0.0000001);
        assert!(other_tail >= -0.15);
    }

    #[test]
    fn percentile_indexing_matches_sorted_positions() {
        let sorted: Vec<f64> = (0..=100).map(|i| i as f64).collect();
        assert_eq!(percentile(&sorted, 10), 10.0);
        assert_eq!(percentile(&sorted, 50), 50.0);
        assert_eq!(percentile(&sorted, 90), 90.0);
    }
}
