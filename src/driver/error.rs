use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinError {
    #[error("room unreachable: {0}")]
    RoomUnreachable(String),

    #[error("join confirmation did not appear within {timeout_ms}ms")]
    ConfirmationTimeout { timeout_ms: u64 },

    #[error("identity rejected: {0}")]
    IdentityRejected(String),

    #[error("automation surface unavailable: {0}")]
    DriverUnavailable(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveError {
    #[error("leave confirmation did not appear within {timeout_ms}ms")]
    ConfirmationTimeout { timeout_ms: u64 },

    #[error("driver already gone: {0}")]
    DriverGone(String),
}
