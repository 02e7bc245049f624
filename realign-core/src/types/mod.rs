//! Shared data model: survey responses, organization metrics, and
//! position snapshots.

pub mod metrics;
pub mod position;
pub mod response;

pub use metrics::OrganizationMetrics;
pub use position::{Position, PositionId, Scenario, ScenarioSnapshot};
pub use response::{
    Dimension, DimensionTags, NormalizedResponse, QuestionType, RawAnswer, Response,
};
