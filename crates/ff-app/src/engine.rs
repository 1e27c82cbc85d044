//! Engine lifecycle: lazy, coalesced initialization of the execution backend.
//!
//! The backend may be heavyweight, so nothing is loaded until the first
//! calculation asks for it. Exactly one caller runs the load; everyone who
//! arrives while it is in flight blocks on the same attempt and receives its
//! outcome. A failed load is recorded, not cached forever: the next request
//! starts a fresh attempt.

use crate::error::EngineInitError;
use ff_fluids::ExecutionBackend;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};

/// Lifecycle state of the execution backend.
///
/// Transitions only move forward, except Failed, which may re-enter
/// Initializing on a retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Initializing,
    Ready,
    Failed,
}

#[derive(Debug)]
struct InitInner {
    state: EngineState,
    /// Bumped when a load attempt starts, so joiners can tell which attempt
    /// they awaited. A bare "is initializing" flag has a read-check-act race.
    attempt: u64,
    last_error: Option<String>,
}

/// Guards `ExecutionBackend::load` behind the state machine above.
pub struct EngineInitializer {
    backend: Arc<dyn ExecutionBackend>,
    inner: Mutex<InitInner>,
    resolved: Condvar,
}

impl EngineInitializer {
    pub fn new(backend: Arc<dyn ExecutionBackend>) -> Self {
        Self {
            backend,
            inner: Mutex::new(InitInner {
                state: EngineState::Uninitialized,
                attempt: 0,
                last_error: None,
            }),
            resolved: Condvar::new(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.inner.lock().unwrap().state
    }

    /// Message recorded by the most recent failed load, if any.
    pub fn last_error(&self) -> Option<String> {
        self.inner.lock().unwrap().last_error.clone()
    }

    /// Block until the backend is Ready, loading it if necessary.
    ///
    /// Never polls: joiners wait on the in-flight attempt and get its
    /// outcome. Returns the load failure when the attempt this call ran or
    /// awaited did not succeed.
    pub fn ensure_ready(&self) -> Result<(), EngineInitError> {
        {
            let mut inner = self.inner.lock().unwrap();
            match inner.state {
                EngineState::Ready => return Ok(()),
                EngineState::Initializing => return self.join_in_flight(inner),
                EngineState::Uninitialized | EngineState::Failed => {
                    inner.state = EngineState::Initializing;
                    inner.attempt += 1;
                }
            }
        }

        // Load outside the lock so joiners only block on the condvar
        let outcome = self.backend.load();

        let mut inner = self.inner.lock().unwrap();
        let result = match outcome {
            Ok(()) => {
                inner.state = EngineState::Ready;
                inner.last_error = None;
                Ok(())
            }
            Err(err) => {
                let message = err.to_string();
                inner.state = EngineState::Failed;
                inner.last_error = Some(message.clone());
                Err(EngineInitError::new(message))
            }
        };
        self.resolved.notify_all();
        result
    }

    fn join_in_flight(
        &self,
        mut inner: MutexGuard<'_, InitInner>,
    ) -> Result<(), EngineInitError> {
        let attempt = inner.attempt;
        while inner.state == EngineState::Initializing && inner.attempt == attempt {
            inner = self.resolved.wait(inner).unwrap();
        }
        match inner.state {
            EngineState::Ready => Ok(()),
            // The attempt we awaited failed; a retry may already be running,
            // but this caller reports the failure it joined.
            _ => Err(EngineInitError::new(
                inner
                    .last_error
                    .clone()
                    .unwrap_or_else(|| "backend load failed".to_string()),
            )),
        }
    }
}
