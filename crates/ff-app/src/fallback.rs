//! Tiered degradation for calculator failures.
//!
//! The fallback policy:
//! 1. Primary evaluation through the execution backend (requires Ready).
//! 2. If it fails, the same formulas evaluated directly, without the backend
//!    indirection, with a degraded-mode warning appended.
//! 3. If that fails too, fixed conservative values with total-failure
//!    warnings.
//!
//! Validation failures never enter this chain; they are real user-input
//! errors and surface unchanged. Everything else degrades one tier at a time
//! as a typed signal, so the UI always has something well-formed to render.

use crate::error::EngineInitError;
use ff_fluids::{
    CalculationResults, EnvironmentalImpact, FlowRegime, FluidError, ProcessParameters, agents,
    rheology,
};
use std::fmt;
use std::sync::Mutex;

/// Why the primary tier was abandoned.
#[derive(Debug, Clone)]
pub enum TierFailure {
    /// The backend never became ready.
    Backend(EngineInitError),
    /// The backend was ready but evaluation failed.
    Computation(FluidError),
}

impl fmt::Display for TierFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(err) => write!(f, "{err}"),
            Self::Computation(err) => write!(f, "{err}"),
        }
    }
}

/// Warning appended by the simplified tier.
pub const DEGRADED_MODE_WARNING: &str =
    "Calculation completed in degraded mode: numeric backend unavailable";

/// Warnings appended by the last-resort tier.
pub const LAST_RESORT_WARNING: &str =
    "Calculation engine failed at every tier: values are conservative defaults";
pub const LAST_RESORT_RETRY_WARNING: &str =
    "Check inputs and retry before relying on these values";

/// Last-resort injection values, chosen to satisfy every structural
/// invariant the UI relies on (laminar, monotone profile).
pub const LAST_RESORT_PRESSURE_KPA: f64 = 150.0;
pub const LAST_RESORT_SHEAR_RATE_PER_S: f64 = 500.0;
pub const LAST_RESORT_VISCOSITY_PA_S: f64 = 0.35;
pub const LAST_RESORT_REYNOLDS: f64 = 1500.0;
pub const LAST_RESORT_INJECTION_TIME_S: f64 = 30.0;

/// Last-resort impact: no claimed benefit once the calculator has failed.
pub const LAST_RESORT_IMPACT: EnvironmentalImpact = EnvironmentalImpact {
    co2_reduction_t_per_year: 0.0,
    thermal_improvement_pct: 0.0,
    cost_savings_per_year: 0.0,
    odp_reduction_kg: 0.0,
};

/// Degrade policy with usage diagnostics.
pub struct FallbackChain {
    /// Count of degraded results produced, for diagnostics
    fallback_count: Mutex<usize>,
}

impl FallbackChain {
    pub fn new() -> Self {
        Self {
            fallback_count: Mutex::new(0),
        }
    }

    /// Get fallback usage count for diagnostics.
    pub fn fallback_count(&self) -> usize {
        *self.fallback_count.lock().unwrap()
    }

    /// Reset fallback counter.
    pub fn reset_fallback_count(&self) {
        *self.fallback_count.lock().unwrap() = 0;
    }

    /// Produce injection results after the primary tier failed.
    ///
    /// `params` must already be validated; this path never rejects input.
    pub fn degraded_injection(
        &self,
        params: &ProcessParameters,
        failure: &TierFailure,
    ) -> CalculationResults {
        self.note_fallback("injection", failure);

        match rheology::calculate(params) {
            Ok(mut results) => {
                results.warnings.push(DEGRADED_MODE_WARNING.to_string());
                results
            }
            Err(err) => {
                eprintln!("[FALLBACK] simplified injection evaluation failed: {err}");
                last_resort_injection(params)
            }
        }
    }

    /// Produce impact figures after the primary tier failed.
    pub fn degraded_impact(
        &self,
        agent_type: &str,
        annual_consumption_kg: f64,
        failure: &TierFailure,
    ) -> EnvironmentalImpact {
        self.note_fallback("impact", failure);

        match agents::compare(agent_type, annual_consumption_kg) {
            Ok(impact) => impact,
            Err(err) => {
                eprintln!("[FALLBACK] simplified impact evaluation failed: {err}");
                LAST_RESORT_IMPACT
            }
        }
    }

    fn note_fallback(&self, operation: &str, failure: &TierFailure) {
        *self.fallback_count.lock().unwrap() += 1;
        eprintln!("[FALLBACK] {operation} degraded: {failure}");
    }
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::new()
    }
}

fn last_resort_injection(params: &ProcessParameters) -> CalculationResults {
    CalculationResults {
        required_pressure_kpa: LAST_RESORT_PRESSURE_KPA,
        shear_rate_per_s: LAST_RESORT_SHEAR_RATE_PER_S,
        apparent_viscosity_pa_s: LAST_RESORT_VISCOSITY_PA_S,
        reynolds_number: LAST_RESORT_REYNOLDS,
        optimal_injection_time_s: LAST_RESORT_INJECTION_TIME_S,
        pressure_profile: rheology::pressure_profile(
            LAST_RESORT_PRESSURE_KPA,
            params.pipe_length_mm,
        ),
        flow_regime: FlowRegime::Laminar,
        warnings: vec![
            LAST_RESORT_WARNING.to_string(),
            LAST_RESORT_RETRY_WARNING.to_string(),
        ],
    }
}
