//! Configuration system for the realign engine.
//! TOML-based, loaded once at startup and passed explicitly into every
//! calculator call — never a hidden module-level singleton, so scoring
//! runs are reproducible and testable with alternate configurations.

pub mod engine_config;
pub mod roi_config;
pub mod scoring_config;

pub use engine_config::EngineConfig;
pub use roi_config::{DeviationSpec, Perturbation, PerturbationConfig, RoiConfig};
pub use scoring_config::{
    IndexWeights, PeerDistribution, ScoringConfig, TierThresholds,
};
