//! Execution backend abstraction.

use crate::agents::EnvironmentalImpact;
use crate::error::FluidResult;
use crate::params::ProcessParameters;
use crate::results::CalculationResults;

/// A formula evaluation backend: load once, then evaluate.
///
/// The engine treats the backend opaquely and never assumes a particular
/// runtime behind it. Implementations must be thread-safe (Send + Sync);
/// `load` may be called again after a failure and must be safe to repeat.
pub trait ExecutionBackend: Send + Sync {
    /// Backend name (for diagnostics).
    fn name(&self) -> &str;

    /// Load the backend and any extension modules it needs.
    ///
    /// The service layer guarantees this runs at most once per successful
    /// lifecycle; a failed load may be retried on a later request.
    fn load(&self) -> FluidResult<()>;

    /// Evaluate the injection formulas for already-validated parameters.
    fn injection(&self, params: &ProcessParameters) -> FluidResult<CalculationResults>;

    /// Evaluate the blowing-agent impact comparison.
    fn impact(&self, agent_type: &str, annual_consumption_kg: f64)
    -> FluidResult<EnvironmentalImpact>;
}
