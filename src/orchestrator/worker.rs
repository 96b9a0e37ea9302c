use crate::driver::{JoinError, SessionDriver};
use crate::orchestrator::error::OrchestratorResult;
use crate::orchestrator::state_machine::SessionStateMachine;
use crate::orchestrator::types::{SessionEvent, SessionOutcome};
use crate::target::SessionTarget;
use std::sync::Arc;
use std::time::Duration;
use tokio::time;
use tracing::{debug, error, info, warn};

/// Drive one session through its whole lifecycle.
///
/// Always yields an outcome: errors stay local to this target and never
/// reach sibling workers.
pub(crate) async fn drive_session(
    driver: Arc<dyn SessionDriver>,
    target: SessionTarget,
    hold: Duration,
) -> SessionOutcome {
    match drive_session_inner(&driver, target.clone(), hold).await {
        Ok(outcome) => outcome,
        // Unreachable with the fixed event sequence above; surfaced as a
        // failed target so the run accounting stays complete.
        Err(e) => {
            error!(identity = %target.identity, error = %e, "session worker aborted");
            SessionOutcome::Failed {
                target,
                error: JoinError::DriverUnavailable(e.to_string()),
            }
        }
    }
}

async fn drive_session_inner(
    driver: &Arc<dyn SessionDriver>,
    target: SessionTarget,
    hold: Duration,
) -> OrchestratorResult<SessionOutcome> {
    let machine = SessionStateMachine::new();

    machine.transition(SessionEvent::Launch)?;
    debug!(room = %target.room_address, identity = %target.identity, "joining");

    let handle = match driver.join(&target.room_address, &target.identity).await {
        Ok(handle) => handle,
        Err(error) => {
            machine.transition(SessionEvent::JoinFailed {
                error: error.to_string(),
            })?;
            warn!(
                room = %target.room_address,
                identity = %target.identity,
                error = %error,
                "join failed"
            );
            return Ok(SessionOutcome::Failed { target, error });
        }
    };

    machine.transition(SessionEvent::Joined)?;
    info!(
        room = %target.room_address,
        identity = %target.identity,
        hold_secs = hold.as_secs(),
        "joined"
    );

    // Hard lower bound on connection lifetime; no cancellation is observed
    // here in the baseline design.
    time::sleep(hold).await;
    machine.transition(SessionEvent::HoldElapsed)?;

    let leave_error = match driver.leave(handle).await {
        Ok(()) => {
            machine.transition(SessionEvent::Left)?;
            debug!(room = %target.room_address, identity = %target.identity, "left");
            None
        }
        Err(error) => {
            machine.transition(SessionEvent::LeaveFailed {
                error: error.to_string(),
            })?;
            warn!(
                room = %target.room_address,
                identity = %target.identity,
                error = %error,
                "leave failed, handle released anyway"
            );
            Some(error)
        }
    };

    Ok(SessionOutcome::Completed { target, leave_error })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{SimulatedDriver, SimulatedDriverConfig};

    fn fast_driver(join_failure_rate: f64, leave_failure_rate: f64) -> Arc<dyn SessionDriver> {
        Arc::new(SimulatedDriver::new(SimulatedDriverConfig {
            join_latency: Duration::ZERO,
            leave_latency: Duration::ZERO,
            join_failure_rate,
            leave_failure_rate,
        }))
    }

    fn target() -> SessionTarget {
        SessionTarget::new("room-x", "swarm", 0, 0)
    }

    #[tokio::test]
    async fn test_worker_happy_path() {
        let outcome = drive_session(fast_driver(0.0, 0.0), target(), Duration::ZERO).await;
        assert!(matches!(
            outcome,
            SessionOutcome::Completed { leave_error: None, .. }
        ));
    }

    #[tokio::test]
    async fn test_worker_join_failure() {
        let outcome = drive_session(fast_driver(1.0, 0.0), target(), Duration::ZERO).await;
        match outcome {
            SessionOutcome::Failed { target, error } => {
                assert_eq!(target.identity, "swarm0");
                assert!(matches!(error, JoinError::ConfirmationTimeout { .. }));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_worker_leave_failure_is_diagnostic() {
        let outcome = drive_session(fast_driver(0.0, 1.0), target(), Duration::ZERO).await;
        assert!(matches!(
            outcome,
            SessionOutcome::Completed { leave_error: Some(_), .. }
        ));
    }

    #[tokio::test]
    async fn test_worker_holds_for_duration() {
        let hold = Duration::from_millis(80);
        let start = std::time::Instant::now();
        drive_session(fast_driver(0.0, 0.0), target(), hold).await;
        assert!(start.elapsed() >= hold);
    }
}
