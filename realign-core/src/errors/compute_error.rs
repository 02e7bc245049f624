//! Internal computation errors.
//!
//! These should never occur for validated configuration. When one
//! surfaces it indicates a configuration bug, not a data problem, so
//! it propagates uncaught rather than being masked into a score that
//! looks valid while being wrong.

use super::error_code::{self, ErrorCode};

/// Unexpected internal failures during score computation.
#[derive(Debug, thiserror::Error)]
pub enum ComputeError {
    #[error("Weight table for index {index} sums to zero")]
    ZeroWeightSum { index: String },

    #[error("Index {index} produced a non-finite score: {value}")]
    NonFiniteScore { index: String, value: f64 },
}

impl ErrorCode for ComputeError {
    fn error_code(&self) -> &'static str {
        error_code::COMPUTE_ERROR
    }
}
