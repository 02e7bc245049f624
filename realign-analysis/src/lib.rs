//! Analysis engine for organizational assessments.
//!
//! Pure computation over inputs supplied by the caller: normalized
//! survey responses become composite health indices, baseline/variant
//! position snapshots become structural diffs with confidence scores,
//! and cost deltas become ROI projections under deterministic,
//! discounted-cashflow, stochastic, and sensitivity models. No I/O
//! happens here — fetching inputs and persisting results belong to the
//! collaborator layer around this crate.

pub mod indices;
pub mod normalize;
pub mod recommend;
pub mod roi;
pub mod scenario;

pub use indices::{compute_all, CompositeIndex, IndexReport, MaturityTier};
pub use normalize::{normalize_response, normalize_responses, NormalizedBatch};
pub use recommend::{synthesize, Recommendation, RecommendationContext};
pub use roi::{
    CalculationMode, DistributionStats, RoiAssumptions, RoiEngine, RoiInputs, RoiRequest,
    RoiResult, SweepParameter, SweepSpec,
};
pub use scenario::{compare_snapshots, estimate_confidence, ComparisonResult, PositionChange};
