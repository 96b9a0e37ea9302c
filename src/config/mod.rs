mod error;
mod types;

pub use error::{ConfigError, ConfigResult};
pub use types::{
    RunConfig, RunMode, DEFAULT_IDENTITY_PREFIX, DEFAULT_INTER_ARRIVAL_DELAY, DEFAULT_ROOM_COUNT,
    DEFAULT_SESSION_DURATION, MULTI_ROOM_DEFAULT_CLIENTS, PLACEHOLDER_ROOM_ADDRESS,
    SINGLE_ROOM_DEFAULT_CLIENTS,
};
