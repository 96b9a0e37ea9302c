mod error;
mod orchestrator;
mod state_machine;
mod types;
mod worker;

pub use error::{OrchestratorError, OrchestratorResult};
pub use orchestrator::SessionOrchestrator;
pub use state_machine::SessionStateMachine;
pub use types::{
    LeaveDiagnostic, RunResult, SessionEvent, SessionFailure, SessionOutcome, SessionPhase,
};
