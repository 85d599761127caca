// Persistence sink for finished and in-progress matches

// Public API
pub use errors::RepositoryError;
pub use models::{CommentaryRecord, MatchRecord, MatchStatus};
pub use repository::{InMemoryMatchRepository, MatchRepository, PostgresMatchRepository};
pub use subscriber::PersistenceListener;

// Internal modules
mod errors;
mod models;
mod repository;
mod subscriber;
