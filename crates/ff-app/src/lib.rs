//! Shared application service layer for foamflow.
//!
//! This crate provides a unified interface for CLI and GUI frontends,
//! centralizing engine lifecycle management, the tiered fallback policy, and
//! the two calculation operations the frontends consume.

pub mod calc_service;
pub mod engine;
pub mod error;
pub mod fallback;

// Re-export key types for convenience
pub use calc_service::{InjectionEngine, SweepSample};
pub use engine::{EngineInitializer, EngineState};
pub use error::{AppError, AppResult, EngineInitError};
pub use fallback::{FallbackChain, TierFailure};
