use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default client count for a single-room run.
pub const SINGLE_ROOM_DEFAULT_CLIENTS: u32 = 2;
/// Default client count per room for a multi-room run.
pub const MULTI_ROOM_DEFAULT_CLIENTS: u32 = 5;
pub const DEFAULT_ROOM_COUNT: u32 = 1;
pub const DEFAULT_IDENTITY_PREFIX: &str = "swarm";
/// Gap between launching successive clients.
pub const DEFAULT_INTER_ARRIVAL_DELAY: Duration = Duration::from_secs(1);
/// How long each client stays connected once joined.
pub const DEFAULT_SESSION_DURATION: Duration = Duration::from_secs(90);
/// Must be overridden with a real conference address before a real run.
pub const PLACEHOLDER_ROOM_ADDRESS: &str = "https://conference.example.com/?room=LoadTest";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    /// All clients join the same room.
    SingleRoom,
    /// Clients are spread across `room_count` rooms derived from the base address.
    MultiRoom,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::SingleRoom => write!(f, "single-room"),
            RunMode::MultiRoom => write!(f, "multi-room"),
        }
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-room" | "single" => Ok(RunMode::SingleRoom),
            "multi-room" | "multi" | "multiple" => Ok(RunMode::MultiRoom),
            other => Err(format!(
                "unknown run mode '{other}', expected 'single-room' or 'multi-room'"
            )),
        }
    }
}

/// Immutable parameters for one load-generation run.
///
/// Constructed once up front and handed to the orchestrator; never read from
/// ambient process state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub mode: RunMode,
    pub clients_per_room: u32,
    pub room_count: u32,
    pub base_room_address: String,
    /// Display-name prefix; each client appends its per-room ordinal.
    pub identity_prefix: String,
    pub inter_arrival_delay: Duration,
    pub session_duration: Duration,
}

impl RunConfig {
    pub fn single_room(base_room_address: impl Into<String>) -> Self {
        Self {
            mode: RunMode::SingleRoom,
            clients_per_room: SINGLE_ROOM_DEFAULT_CLIENTS,
            room_count: 1,
            base_room_address: base_room_address.into(),
            identity_prefix: DEFAULT_IDENTITY_PREFIX.to_string(),
            inter_arrival_delay: DEFAULT_INTER_ARRIVAL_DELAY,
            session_duration: DEFAULT_SESSION_DURATION,
        }
    }

    pub fn multi_room(base_room_address: impl Into<String>, room_count: u32) -> Self {
        Self {
            mode: RunMode::MultiRoom,
            clients_per_room: MULTI_ROOM_DEFAULT_CLIENTS,
            room_count,
            base_room_address: base_room_address.into(),
            identity_prefix: DEFAULT_IDENTITY_PREFIX.to_string(),
            inter_arrival_delay: DEFAULT_INTER_ARRIVAL_DELAY,
            session_duration: DEFAULT_SESSION_DURATION,
        }
    }

    pub fn with_clients_per_room(mut self, clients: u32) -> Self {
        self.clients_per_room = clients;
        self
    }

    pub fn with_identity_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.identity_prefix = prefix.into();
        self
    }

    pub fn with_inter_arrival_delay(mut self, delay: Duration) -> Self {
        self.inter_arrival_delay = delay;
        self
    }

    pub fn with_session_duration(mut self, duration: Duration) -> Self {
        self.session_duration = duration;
        self
    }

    /// Total number of sessions this run will attempt.
    pub fn total_sessions(&self) -> u32 {
        self.room_count * self.clients_per_room
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.clients_per_room == 0 {
            return Err(ConfigError::ZeroClients);
        }
        if self.room_count == 0 {
            return Err(ConfigError::ZeroRooms);
        }
        if self.mode == RunMode::SingleRoom && self.room_count != 1 {
            return Err(ConfigError::SingleRoomCount(self.room_count));
        }
        if self.base_room_address.is_empty() {
            return Err(ConfigError::EmptyRoomAddress);
        }
        if self.identity_prefix.is_empty() {
            return Err(ConfigError::EmptyIdentityPrefix);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_room_defaults() {
        let config = RunConfig::single_room("https://meet.test/?room=a");
        assert_eq!(config.mode, RunMode::SingleRoom);
        assert_eq!(config.clients_per_room, SINGLE_ROOM_DEFAULT_CLIENTS);
        assert_eq!(config.room_count, 1);
        assert_eq!(config.inter_arrival_delay, Duration::from_secs(1));
        assert_eq!(config.session_duration, Duration::from_secs(90));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_multi_room_defaults() {
        let config = RunConfig::multi_room("https://meet.test/?room=a", 4);
        assert_eq!(config.mode, RunMode::MultiRoom);
        assert_eq!(config.clients_per_room, MULTI_ROOM_DEFAULT_CLIENTS);
        assert_eq!(config.total_sessions(), 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_clients() {
        let config = RunConfig::single_room("room").with_clients_per_room(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroClients));
    }

    #[test]
    fn test_validate_zero_rooms() {
        let mut config = RunConfig::multi_room("room", 2);
        config.room_count = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroRooms));
    }

    #[test]
    fn test_validate_single_room_count() {
        let mut config = RunConfig::single_room("room");
        config.room_count = 3;
        assert_eq!(config.validate(), Err(ConfigError::SingleRoomCount(3)));
    }

    #[test]
    fn test_validate_empty_address() {
        let config = RunConfig::single_room("");
        assert_eq!(config.validate(), Err(ConfigError::EmptyRoomAddress));
    }

    #[test]
    fn test_mode_round_trip() {
        assert_eq!("single-room".parse::<RunMode>(), Ok(RunMode::SingleRoom));
        assert_eq!("multiple".parse::<RunMode>(), Ok(RunMode::MultiRoom));
        assert!("both".parse::<RunMode>().is_err());
        assert_eq!(RunMode::MultiRoom.to_string(), "multi-room");
    }

    #[test]
    fn test_builder_methods() {
        let config = RunConfig::single_room("room")
            .with_clients_per_room(10)
            .with_identity_prefix("bot")
            .with_inter_arrival_delay(Duration::from_millis(250))
            .with_session_duration(Duration::from_secs(30));
        assert_eq!(config.clients_per_room, 10);
        assert_eq!(config.identity_prefix, "bot");
        assert_eq!(config.inter_arrival_delay, Duration::from_millis(250));
        assert_eq!(config.session_duration, Duration::from_secs(30));
    }
}
