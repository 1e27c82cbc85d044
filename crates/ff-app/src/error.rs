//! Error types for the ff-app service layer.

use std::path::PathBuf;

/// The execution backend failed to become ready.
///
/// Absorbed by the fallback policy; callers of the public operations never
/// see this as a hard failure.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Execution backend failed to initialize: {message}")]
pub struct EngineInitError {
    pub message: String,
}

impl EngineInitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ff_fluids::ValidationError),

    #[error("Calculation error: {0}")]
    Fluid(#[from] ff_fluids::FluidError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read parameter file: {path}")]
    ParameterFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse parameter file: {0}")]
    ParameterFileParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ff-app operations.
pub type AppResult<T> = Result<T, AppError>;
