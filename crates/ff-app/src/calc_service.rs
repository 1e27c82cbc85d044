//! Injection engine service: the operations the frontends consume.

use crate::engine::{EngineInitializer, EngineState};
use crate::error::EngineInitError;
use crate::fallback::{FallbackChain, TierFailure};
use ff_fluids::{
    CalculationResults, EnvironmentalImpact, ExecutionBackend, NativeBackend, ProcessParameters,
    SweepDefinition, ValidationError,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One point of a parameter sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSample {
    /// Swept variable's value at this point, in its input units
    pub value: f64,
    pub results: CalculationResults,
}

/// The calculation engine handed to the UI layer.
///
/// Owns the backend lifecycle and the fallback policy; constructed with any
/// backend so tests can inject failing or instrumented ones. Safe to share
/// across threads; independent calculations have no shared state beyond the
/// engine lifecycle itself.
pub struct InjectionEngine {
    backend: Arc<dyn ExecutionBackend>,
    initializer: EngineInitializer,
    fallback: FallbackChain,
}

impl InjectionEngine {
    /// Engine over the compiled-in formula backend.
    pub fn native() -> Self {
        Self::with_backend(Arc::new(NativeBackend::new()))
    }

    /// Engine over an arbitrary backend.
    pub fn with_backend(backend: Arc<dyn ExecutionBackend>) -> Self {
        Self {
            initializer: EngineInitializer::new(Arc::clone(&backend)),
            backend,
            fallback: FallbackChain::new(),
        }
    }

    /// Current backend lifecycle state.
    pub fn engine_state(&self) -> EngineState {
        self.initializer.state()
    }

    /// Number of degraded results this engine has produced.
    pub fn fallback_count(&self) -> usize {
        self.fallback.fallback_count()
    }

    /// Warm the backend up front instead of on the first calculation.
    pub fn ensure_ready(&self) -> Result<(), EngineInitError> {
        self.initializer.ensure_ready()
    }

    /// Compute injection parameters.
    ///
    /// Invalid input is the only error callers see. Backend trouble of any
    /// kind degrades through the fallback chain and still yields a
    /// well-formed result, with warnings saying what happened.
    pub fn calculate_parameters(
        &self,
        params: &ProcessParameters,
    ) -> Result<CalculationResults, ValidationError> {
        params.validate()?;

        let failure = match self.initializer.ensure_ready() {
            Ok(()) => match self.backend.injection(params) {
                Ok(results) => return Ok(results),
                Err(err) => TierFailure::Computation(err),
            },
            Err(err) => TierFailure::Backend(err),
        };

        Ok(self.fallback.degraded_injection(params, &failure))
    }

    /// Compare a blowing agent against the reference agent.
    ///
    /// Never fails: unknown agents resolve to the HFC entry and backend
    /// trouble degrades to the fixed fallback figures.
    pub fn calculate_environmental_impact(
        &self,
        agent_type: &str,
        annual_consumption_kg: f64,
    ) -> EnvironmentalImpact {
        let failure = match self.initializer.ensure_ready() {
            Ok(()) => match self.backend.impact(agent_type, annual_consumption_kg) {
                Ok(impact) => return impact,
                Err(err) => TierFailure::Computation(err),
            },
            Err(err) => TierFailure::Backend(err),
        };

        self.fallback
            .degraded_impact(agent_type, annual_consumption_kg, &failure)
    }

    /// Run the full calculate path over every point of a sweep.
    ///
    /// Each point is validated like any standalone request; the first
    /// invalid point aborts the sweep with its validation error.
    pub fn calculate_sweep(
        &self,
        base: &ProcessParameters,
        sweep: &SweepDefinition,
    ) -> Result<Vec<SweepSample>, ValidationError> {
        sweep
            .generate_points()
            .into_iter()
            .map(|value| {
                let params = sweep.variable.apply(base, value);
                self.calculate_parameters(&params)
                    .map(|results| SweepSample { value, results })
            })
            .collect()
    }
}
