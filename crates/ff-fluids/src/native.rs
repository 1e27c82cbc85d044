//! Compiled-in execution backend.

use crate::agents::{self, EnvironmentalImpact};
use crate::backend::ExecutionBackend;
use crate::error::FluidResult;
use crate::params::ProcessParameters;
use crate::results::CalculationResults;
use crate::rheology;

/// Native backend: the formulas compiled into this crate.
///
/// There is nothing to fetch or link at runtime, so `load` is immediate; the
/// trait indirection stays so the service layer can swap in instrumented or
/// failing backends under test.
pub struct NativeBackend {
    // Future: configuration options (alternate material tables, etc.)
}

impl NativeBackend {
    /// Create a new native backend.
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for NativeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionBackend for NativeBackend {
    fn name(&self) -> &str {
        "native"
    }

    fn load(&self) -> FluidResult<()> {
        Ok(())
    }

    fn injection(&self, params: &ProcessParameters) -> FluidResult<CalculationResults> {
        rheology::calculate(params)
    }

    fn impact(
        &self,
        agent_type: &str,
        annual_consumption_kg: f64,
    ) -> FluidResult<EnvironmentalImpact> {
        agents::compare(agent_type, annual_consumption_kg)
    }
}
