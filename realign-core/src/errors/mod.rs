//! Error handling for the realign engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Data-completeness issues are deliberately NOT here — they are
//! warnings ([`crate::warnings::DataWarning`]) folded into confidence
//! scores, so partial data still yields a usable, discounted result.

pub mod compute_error;
pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod input_error;

pub use compute_error::ComputeError;
pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::ErrorCode;
pub use input_error::InputError;
