use serde::{Deserialize, Serialize};

/// One (room, identity) pair describing a session to be created.
///
/// Targets are derived from the run config before any worker starts; they
/// carry everything a worker needs to join as a named participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTarget {
    pub room_address: String,
    /// Synthetic display name, unique within its room.
    pub identity: String,
    pub room_index: u32,
    /// Position within the room; restarts at 0 for every room.
    pub ordinal: u32,
}

impl SessionTarget {
    pub fn new(room_address: impl Into<String>, identity_prefix: &str, room_index: u32, ordinal: u32) -> Self {
        Self {
            room_address: room_address.into(),
            identity: format!("{identity_prefix}{ordinal}"),
            room_index,
            ordinal,
        }
    }
}
