use crate::orchestrator::error::{OrchestratorError, OrchestratorResult};
use crate::orchestrator::types::{SessionEvent, SessionPhase};
use parking_lot::RwLock;
use std::sync::Arc;

/// Per-session lifecycle: Pending -> Joining -> Active -> Leaving -> Done,
/// with Errored absorbing a failed join. A failed leave still ends in Done;
/// the error travels with the worker's outcome instead.
#[derive(Clone)]
pub struct SessionStateMachine {
    state: Arc<RwLock<SessionPhase>>,
}

impl Default for SessionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStateMachine {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionPhase::Pending)),
        }
    }

    /// Get current phase
    pub fn current_phase(&self) -> SessionPhase {
        self.state.read().clone()
    }

    /// Transition phase based on event
    pub fn transition(&self, event: SessionEvent) -> OrchestratorResult<SessionPhase> {
        let mut state = self.state.write();

        let new_state = match (&*state, &event) {
            // Worker scheduled, join attempt begins
            (SessionPhase::Pending, SessionEvent::Launch) => SessionPhase::Joining,

            // Join confirmed, session is held open
            (SessionPhase::Joining, SessionEvent::Joined) => SessionPhase::Active,

            // Join failed, terminal for this target
            (SessionPhase::Joining, SessionEvent::JoinFailed { error }) => SessionPhase::Errored {
                error: error.clone(),
            },

            // Hold duration elapsed, teardown begins
            (SessionPhase::Active, SessionEvent::HoldElapsed) => SessionPhase::Leaving,

            // Leave confirmed
            (SessionPhase::Leaving, SessionEvent::Left) => SessionPhase::Done,

            // Leave failed; the handle is released regardless and the
            // session still completes
            (SessionPhase::Leaving, SessionEvent::LeaveFailed { .. }) => SessionPhase::Done,

            // Invalid transition
            _ => {
                return Err(OrchestratorError::InvalidStateTransition(format!(
                    "cannot handle {:?} in phase {:?}",
                    event, *state
                )));
            }
        };

        *state = new_state.clone();
        Ok(new_state)
    }
}
