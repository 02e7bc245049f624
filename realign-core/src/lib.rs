//! Core types, traits, errors, config, and constants for the realign
//! assessment engine.
//!
//! This crate carries no algorithms. It defines the vocabulary shared by
//! every calculator in `realign-analysis`: survey responses, organization
//! metrics, position snapshots, the error taxonomy, data-completeness
//! warnings, and the explicitly-passed configuration object.

pub mod config;
pub mod constants;
pub mod errors;
pub mod telemetry;
pub mod traits;
pub mod types;
pub mod warnings;

pub use config::{EngineConfig, RoiConfig, ScoringConfig};
pub use errors::{ComputeError, ConfigError, EngineError, ErrorCode, InputError};
pub use traits::{Cancellable, CancellationToken, EntropySource, RandomSource, SeededSource};
pub use types::{
    Dimension, NormalizedResponse, OrganizationMetrics, Position, PositionId, QuestionType,
    RawAnswer, Response, Scenario, ScenarioSnapshot,
};
pub use warnings::{DataWarning, SnapshotSide};
