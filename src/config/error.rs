use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("clients_per_room must be positive")]
    ZeroClients,

    #[error("room_count must be positive")]
    ZeroRooms,

    #[error("single-room runs use exactly one room, got {0}")]
    SingleRoomCount(u32),

    #[error("room address is empty")]
    EmptyRoomAddress,

    #[error("identity prefix is empty")]
    EmptyIdentityPrefix,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
