use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid team: {0}")]
    InvalidTeam(String),

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}
