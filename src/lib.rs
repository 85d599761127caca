// Library crate for the matchday match simulation server
// This file exposes the public API for the binary and integration tests

pub mod config;
pub mod engine;
pub mod event;
pub mod matches;
pub mod persistence;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::{EngineConfig, ServerConfig};
pub use engine::{MatchEngine, MatchPhase, MatchState, TeamDescriptor};
pub use event::{CommentaryEvent, CommentaryKind, MatchEventBus, MatchSummary, MinuteUpdate};
pub use persistence::{InMemoryMatchRepository, MatchRepository, PersistenceListener};
pub use shared::{AppError, AppState};
