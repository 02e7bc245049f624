//! Input validation errors.
//!
//! Raised immediately at the function boundary; never recovered.
//! Financial projections are high-stakes, so invalid financial inputs
//! are rejected rather than silently clamped.

use super::error_code::{self, ErrorCode};

/// Errors for malformed or out-of-contract caller input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Position {position_id} has negative or non-finite FTE: {value}")]
    NegativeFte { position_id: String, value: f64 },

    #[error("Position {position_id} has negative or non-finite cost: {value}")]
    NegativeCost { position_id: String, value: f64 },

    #[error("Time horizon must be positive, got {months} months")]
    NonPositiveTimeHorizon { months: i64 },

    #[error("Discount rate must be >= -1.0, got {value}")]
    DiscountRateBelowFloor { value: f64 },

    #[error("Non-finite value for {field}: {value}")]
    NonFiniteNumber { field: String, value: f64 },

    #[error("Sensitivity mode requires a sweep specification")]
    MissingSweepSpec,

    #[error("Sensitivity sweep for {parameter} has an empty or inverted range")]
    InvalidSweepRange { parameter: String },

    #[error("Sensitivity sweep for {parameter} needs at least 2 steps, got {steps}")]
    TooFewSweepSteps { parameter: String, steps: u32 },
}

impl ErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
