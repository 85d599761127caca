use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Match not found: {0}")]
    NotFound(String),

    #[error("Match already exists: {0}")]
    AlreadyExists(String),

    #[error("Match already completed: {0}")]
    AlreadyCompleted(String),

    #[error("Database error: {0}")]
    Database(String),
}
