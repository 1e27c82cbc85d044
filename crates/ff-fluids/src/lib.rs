//! ff-fluids: injection hydraulics and blowing-agent data for foamflow.
//!
//! Provides:
//! - Process parameter definitions and validation
//! - The canonical non-Newtonian injection formula set
//! - ExecutionBackend trait for formula evaluation
//! - Compiled-in native backend
//! - Blowing agent catalog and environmental impact comparison
//! - Parameter sweep definitions
//!
//! # Architecture
//!
//! This crate defines a stable API (`ExecutionBackend` trait) that isolates the
//! rest of foamflow from how formulas are evaluated. The native backend is the
//! primary evaluator, but the architecture allows alternate runtimes and the
//! instrumented backends the service layer uses in tests.
//!
//! # Example
//!
//! ```
//! use ff_fluids::{ExecutionBackend, NativeBackend, ProcessParameters};
//!
//! let backend = NativeBackend::new();
//! backend.load().unwrap();
//!
//! let params = ProcessParameters::new(100.0, 20.0, 25.0, 0.001);
//! params.validate().unwrap();
//!
//! let results = backend.injection(&params).unwrap();
//! println!("Required pressure: {} kPa", results.required_pressure_kpa);
//! ```

pub mod agents;
pub mod backend;
pub mod error;
pub mod native;
pub mod params;
pub mod results;
pub mod rheology;
pub mod sweeps;

// Re-exports for ergonomics
pub use agents::{
    BlowingAgent, EnvironmentalImpact, blowing_agent_table, lookup_agent, reference_agent,
};
pub use backend::ExecutionBackend;
pub use error::{FluidError, FluidResult};
pub use native::NativeBackend;
pub use params::{ProcessParameters, ValidationError};
pub use results::{CalculationResults, FlowRegime, ProfilePoint};
pub use sweeps::{SweepDefinition, SweepType, SweepVariable};
