//! Top-level engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{RoiConfig, ScoringConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Built once at startup — from compiled defaults, a TOML string, or a
/// TOML file — validated, and then passed by reference into every
/// calculator call. The engine is a library: environment/CLI layering
/// is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub roi: RoiConfig,
}

impl EngineConfig {
    /// Load and validate configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), version = %config.scoring.version, "engine config loaded");
        Ok(config)
    }

    /// Validate all sub-configs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.roi.validate()?;
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
