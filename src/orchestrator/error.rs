use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;
