//! Shared constants for the realign assessment engine.

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Neutral midpoint used when a metric or category cannot be resolved.
pub const NEUTRAL_MIDPOINT: f64 = 0.5;

/// Default Monte Carlo iteration count.
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Default annual discount rate for discounted-cashflow ROI.
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.08;

/// Default projection horizon in years.
pub const DEFAULT_TIME_HORIZON_YEARS: u32 = 5;

/// Default fraction of projected savings assumed to materialize.
pub const DEFAULT_SAVINGS_REALIZATION: f64 = 0.90;

/// Default adoption rate for proposed changes.
pub const DEFAULT_ADOPTION_RATE: f64 = 0.85;

/// Trials per Monte Carlo batch; cancellation is checked between batches.
pub const MONTE_CARLO_BATCH_SIZE: u32 = 64;

/// Default hierarchy penalty threshold (normalized hierarchy depth).
pub const DEFAULT_HIERARCHY_PENALTY_THRESHOLD: f64 = 0.6;

/// Maximum hierarchy penalty applied to the structural complexity index.
pub const DEFAULT_HIERARCHY_PENALTY_MAX: f64 = 0.15;

/// Tolerance when validating that an index's weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;
