//! Calculation and backend errors.

use ff_core::FfError;
use thiserror::Error;

/// Result type for fluid calculations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while evaluating the injection or impact formulas.
///
/// These never reach the public API as errors; the service layer absorbs them
/// and substitutes a degraded result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// A derived quantity came out NaN or infinite.
    #[error("Non-finite value computed for {what}")]
    NonFinite { what: &'static str },

    /// Non-physical values (zero radius, negative flow, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Execution backend failure.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl From<FfError> for FluidError {
    fn from(err: FfError) -> Self {
        match err {
            FfError::NonFinite { what, .. } => FluidError::NonFinite { what },
            FfError::InvalidArg { what } => FluidError::InvalidArg { what },
            FfError::Invariant { what } => FluidError::NonPhysical { what },
        }
    }
}
