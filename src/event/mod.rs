// Event-driven plumbing between a match engine and the outside world
//
// The engine only ever emits; persistence, UI bindings and logging live in
// listeners registered on the bus.

// Public API - what other modules can use
pub use bus::MatchEventBus;
pub use events::{
    CommentaryEvent, CommentaryKind, EventKind, MatchEvent, MatchSummary, MinuteUpdate,
};
pub use handler::{EventError, MatchEventListener};

// Internal modules
mod bus;
mod events;
mod handler;
