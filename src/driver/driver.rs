use crate::driver::error::{JoinError, LeaveError};
use async_trait::async_trait;
use uuid::Uuid;

/// An established session in a room.
///
/// Deliberately not `Clone`: the handle is owned by exactly one worker and
/// consumed by value on leave, so a session can only be released once.
#[derive(Debug)]
pub struct SessionHandle {
    id: Uuid,
    room_address: String,
    identity: String,
}

impl SessionHandle {
    pub fn new(room_address: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            room_address: room_address.into(),
            identity: identity.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn room_address(&self) -> &str {
        &self.room_address
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }
}

/// Boundary to whatever actually drives the conferencing client.
///
/// The orchestrator treats both calls as opaque blocking operations; any
/// internal waits or timeouts surface as `JoinError`/`LeaveError`.
#[async_trait]
pub trait SessionDriver: Send + Sync {
    /// Join `room_address` as a participant named `identity`.
    async fn join(&self, room_address: &str, identity: &str) -> Result<SessionHandle, JoinError>;

    /// Release an established session. The handle is consumed either way.
    async fn leave(&self, handle: SessionHandle) -> Result<(), LeaveError>;
}
