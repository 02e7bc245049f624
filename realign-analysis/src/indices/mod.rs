//! Composite index calculators.
//!
//! Each named index is a weighted sum of a fixed, versioned set of
//! organization metrics and/or dimension-tagged response means, with
//! weights from the validated [`ScoringConfig`]. Indices are computed
//! independently and share no mutable state; recomputing with identical
//! inputs yields bit-identical scores. Missing metrics resolve to the
//! neutral midpoint with a warning so a score is always produced.

pub mod leadership;
pub mod readiness;
pub mod resilience;
pub mod structural;
pub mod systemic;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

use realign_core::config::ScoringConfig;
use realign_core::constants::NEUTRAL_MIDPOINT;
use realign_core::errors::ComputeError;
use realign_core::types::{Dimension, NormalizedResponse, OrganizationMetrics};
use realign_core::warnings::DataWarning;

/// A named, versioned aggregate score derived from normalized data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeIndex {
    pub name: String,
    /// Scoring config version the index was computed under.
    pub version: String,
    /// Overall score in [0, 1].
    pub overall_score: f64,
    /// Component scores in [0, 1], keyed by component name. BTreeMap
    /// keeps serialized output byte-stable across recomputation.
    pub sub_scores: BTreeMap<String, f64>,
    /// Unix timestamp of computation. Excluded from determinism
    /// guarantees — only the score fields are.
    pub computed_at: i64,
}

/// Five-level maturity classification of the adjusted overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityTier {
    Transforming,
    Growing,
    Developing,
    Establishing,
    Emerging,
}

impl MaturityTier {
    /// Classify an adjusted score against configured thresholds.
    pub fn from_score(score: f64, tiers: &realign_core::config::TierThresholds) -> Self {
        if score >= tiers.transforming {
            Self::Transforming
        } else if score >= tiers.growing {
            Self::Growing
        } else if score >= tiers.developing {
            Self::Developing
        } else if score >= tiers.establishing {
            Self::Establishing
        } else {
            Self::Emerging
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Transforming => "transforming",
            Self::Growing => "growing",
            Self::Developing => "developing",
            Self::Establishing => "establishing",
            Self::Emerging => "emerging",
        }
    }
}

/// Everything produced by one full index computation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexReport {
    pub indices: Vec<CompositeIndex>,
    /// Mean of the five index scores, in [0, 1].
    pub overall: f64,
    /// Percentile rank of `overall` against the configured peer
    /// distribution, clamped to [1, 99].
    pub peer_percentile: u8,
    pub tier: MaturityTier,
    pub warnings: Vec<DataWarning>,
}

type IndexFn = fn(
    &ScoringConfig,
    &OrganizationMetrics,
    &[NormalizedResponse],
    i64,
) -> Result<(CompositeIndex, Vec<DataWarning>), ComputeError>;

const CALCULATORS: [IndexFn; 5] = [
    structural::compute,
    resilience::compute,
    leadership::compute,
    readiness::compute,
    systemic::compute,
];

/// Compute all five composite indices plus the overall roll-up.
pub fn compute_all(
    config: &ScoringConfig,
    metrics: &OrganizationMetrics,
    responses: &[NormalizedResponse],
) -> Result<IndexReport, ComputeError> {
    let computed_at = unix_now();
    let mut warnings = Vec::new();
    let mut indices = Vec::with_capacity(CALCULATORS.len());

    for compute in CALCULATORS {
        let (index, mut index_warnings) = compute(config, metrics, responses, computed_at)?;
        warnings.append(&mut index_warnings);
        indices.push(index);
    }

    // The same missing metric surfaces once, not once per index.
    dedup_warnings(&mut warnings);

    let overall = indices.iter().map(|i| i.overall_score).sum::<f64>() / indices.len() as f64;
    let peer_percentile = peer_percentile(overall, config);
    // Tier reflects both absolute score and peer standing.
    let adjusted = overall * 0.7 + (peer_percentile as f64 / 100.0) * 0.3;
    let tier = MaturityTier::from_score(adjusted, &config.tiers);

    tracing::debug!(
        overall,
        peer_percentile,
        tier = tier.name(),
        warning_count = warnings.len(),
        "composite indices computed"
    );

    Ok(IndexReport {
        indices,
        overall,
        peer_percentile,
        tier,
        warnings,
    })
}

/// Percentile of a score against the configured peer distribution,
/// via the normal CDF, clamped to [1, 99].
pub fn peer_percentile(score: f64, config: &ScoringConfig) -> u8 {
    let normal = match Normal::new(config.peer.mean, config.peer.std_dev) {
        Ok(n) => n,
        Err(_) => return 50,
    };
    let pct = (normal.cdf(score) * 100.0).round();
    pct.clamp(1.0, 99.0) as u8
}

// ---- shared helpers for the index modules ----

/// Tracks metric reads, substituting the midpoint for missing fields
/// and recording a warning per substitution.
pub(crate) struct MetricReader {
    warnings: Vec<DataWarning>,
}

impl MetricReader {
    pub(crate) fn new() -> Self {
        Self { warnings: Vec::new() }
    }

    /// Resolve a metric field, clamped to [0, 1].
    pub(crate) fn get(&mut self, name: &'static str, value: Option<f64>) -> f64 {
        match value {
            Some(v) if v.is_finite() => v.clamp(0.0, 1.0),
            _ => {
                self.warnings.push(DataWarning::MissingMetric {
                    field: name.to_string(),
                });
                NEUTRAL_MIDPOINT
            }
        }
    }

    pub(crate) fn into_warnings(self) -> Vec<DataWarning> {
        self.warnings
    }
}

/// Mean of normalized values for responses tagged with a dimension.
/// `None` when no response carries the tag.
pub(crate) fn dimension_mean(responses: &[NormalizedResponse], dimension: Dimension) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for r in responses {
        if r.has_dimension(dimension) {
            sum += r.normalized;
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f64)
}

/// Mean of the given component parts, optionally blended with a
/// dimension response mean when one exists.
pub(crate) fn blend(parts: &[f64], response_mean: Option<f64>) -> f64 {
    let mut sum: f64 = parts.iter().sum();
    let mut count = parts.len();
    if let Some(mean) = response_mean {
        sum += mean;
        count += 1;
    }
    if count == 0 {
        return NEUTRAL_MIDPOINT;
    }
    (sum / count as f64).clamp(0.0, 1.0)
}

/// Weighted average over (value, weight) pairs. A zero weight sum is a
/// configuration bug — validation guarantees it cannot happen for a
/// loaded config — so it surfaces as a fatal `ComputeError`.
pub(crate) fn weighted_sum(index: &str, parts: &[(f64, f64)]) -> Result<f64, ComputeError> {
    let total_weight: f64 = parts.iter().map(|(_, w)| w).sum();
    if total_weight <= 0.0 || !total_weight.is_finite() {
        return Err(ComputeError::ZeroWeightSum {
            index: index.to_string(),
        });
    }
    let weighted: f64 = parts.iter().map(|(v, w)| v * w).sum();
    let score = weighted / total_weight;
    if !score.is_finite() {
        return Err(ComputeError::NonFiniteScore {
            index: index.to_string(),
            value: score,
        });
    }
    Ok(score.clamp(0.0, 1.0))
}

pub(crate) fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn dedup_warnings(warnings: &mut Vec<DataWarning>) {
    let mut seen: Vec<DataWarning> = Vec::new();
    warnings.retain(|w| {
        if seen.contains(w) {
            false
        } else {
            seen.push(w.clone());
            true
        }
    });
}
