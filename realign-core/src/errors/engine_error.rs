//! Top-level engine error aggregating subsystem errors.

use super::error_code::{self, ErrorCode};
use super::{ComputeError, ConfigError, InputError};

/// Errors that can occur across an engine invocation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Computation error: {0}")]
    Compute(#[from] ComputeError),

    #[error("Computation cancelled")]
    Cancelled,
}

impl ErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Compute(e) => e.error_code(),
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}
