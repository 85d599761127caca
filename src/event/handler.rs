use thiserror::Error;

use super::events::{CommentaryEvent, MatchSummary, MinuteUpdate};

/// Errors a listener can report back to the bus
///
/// The bus logs these and moves on; they never reach the simulation.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Listener failed: {0}")]
    Listener(String),

    #[error("Listener panicked: {0}")]
    Panicked(String),
}

impl EventError {
    pub fn listener(msg: impl Into<String>) -> Self {
        EventError::Listener(msg.into())
    }
}

/// Trait for components that react to every kind of match event
///
/// Delivery is synchronous on the engine's tick, so implementations that do
/// I/O should hand the work off (e.g. `tokio::spawn`) rather than block.
///
/// Examples:
/// - PersistenceListener: writes commentary and the final summary to a repository
/// - a UI binding that mirrors the score
pub trait MatchEventListener: Send + Sync {
    fn on_minute_update(&self, _update: &MinuteUpdate) -> Result<(), EventError> {
        Ok(())
    }

    fn on_commentary(&self, _event: &CommentaryEvent) -> Result<(), EventError> {
        Ok(())
    }

    fn on_match_end(&self, _summary: &MatchSummary) -> Result<(), EventError> {
        Ok(())
    }

    /// Get a human-readable name for this listener (for logging/debugging)
    fn name(&self) -> &'static str;
}
