use crate::driver::{JoinError, LeaveError};
use crate::target::SessionTarget;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    Pending,
    Joining,
    Active,
    Leaving,
    Done,
    Errored { error: String },
}

impl SessionPhase {
    pub fn is_active(&self) -> bool {
        matches!(self, SessionPhase::Active)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::Done | SessionPhase::Errored { .. })
    }
}

#[derive(Debug, Clone)]
pub enum SessionEvent {
    Launch,
    Joined,
    JoinFailed { error: String },
    HoldElapsed,
    Left,
    LeaveFailed { error: String },
}

/// Terminal outcome of one worker, reported exactly once per target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Joined and held for the full duration. A failed leave is kept as a
    /// diagnostic; the target still counts as a successful join.
    Completed {
        target: SessionTarget,
        leave_error: Option<LeaveError>,
    },
    /// The join never succeeded; leave was never attempted.
    Failed {
        target: SessionTarget,
        error: JoinError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFailure {
    pub target: SessionTarget,
    pub error: JoinError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDiagnostic {
    pub target: SessionTarget,
    pub error: LeaveError,
}

/// Aggregate outcome of a run, assembled after every worker has terminated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunResult {
    pub successful_joins: u32,
    pub failures: Vec<SessionFailure>,
    pub leave_diagnostics: Vec<LeaveDiagnostic>,
    pub elapsed: Duration,
}

impl RunResult {
    pub(crate) fn record(&mut self, outcome: SessionOutcome) {
        match outcome {
            SessionOutcome::Completed { target, leave_error } => {
                self.successful_joins += 1;
                if let Some(error) = leave_error {
                    self.leave_diagnostics.push(LeaveDiagnostic { target, error });
                }
            }
            SessionOutcome::Failed { target, error } => {
                self.failures.push(SessionFailure { target, error });
            }
        }
    }

    pub fn total_sessions(&self) -> usize {
        self.successful_joins as usize + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.leave_diagnostics.is_empty()
    }

    /// Print the run outcome to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Swarm Report ===");
        println!("Duration: {:?}", self.elapsed);
        println!("Sessions: {}", self.total_sessions());
        println!("Joined: {}", self.successful_joins);
        println!("Failed: {}", self.failures.len());

        for failure in &self.failures {
            println!(
                "  ✗ {} in {} — {}",
                failure.target.identity, failure.target.room_address, failure.error
            );
        }

        if !self.leave_diagnostics.is_empty() {
            println!("Leave diagnostics: {}", self.leave_diagnostics.len());
            for diag in &self.leave_diagnostics {
                println!(
                    "  ! {} in {} — {}",
                    diag.target.identity, diag.target.room_address, diag.error
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(ordinal: u32) -> SessionTarget {
        SessionTarget::new("room", "swarm", 0, ordinal)
    }

    #[test]
    fn test_record_completed() {
        let mut result = RunResult::default();
        result.record(SessionOutcome::Completed {
            target: target(0),
            leave_error: None,
        });

        assert_eq!(result.successful_joins, 1);
        assert!(result.is_clean());
    }

    #[test]
    fn test_record_leave_diagnostic_keeps_success() {
        let mut result = RunResult::default();
        result.record(SessionOutcome::Completed {
            target: target(0),
            leave_error: Some(LeaveError::DriverGone("gone".into())),
        });

        assert_eq!(result.successful_joins, 1);
        assert_eq!(result.leave_diagnostics.len(), 1);
        assert!(result.failures.is_empty());
        assert!(!result.is_clean());
    }

    #[test]
    fn test_record_failure() {
        let mut result = RunResult::default();
        result.record(SessionOutcome::Failed {
            target: target(0),
            error: JoinError::RoomUnreachable("room".into()),
        });

        assert_eq!(result.successful_joins, 0);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.total_sessions(), 1);
    }

    #[test]
    fn test_result_serializes() {
        let mut result = RunResult::default();
        result.record(SessionOutcome::Failed {
            target: target(1),
            error: JoinError::ConfirmationTimeout { timeout_ms: 5000 },
        });

        let json = serde_json::to_string(&result).unwrap();
        let back: RunResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.failures, result.failures);
        assert_eq!(back.successful_joins, 0);
    }
}
