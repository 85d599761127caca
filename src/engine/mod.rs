// Public API
pub use self::core::MatchEngine;
pub use clock::MatchClock;
pub use commentary::Commentator;
pub use errors::EngineError;
pub use policy::SimulationPolicy;
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use roster::{generate_player, generate_roster};
pub use simulator::EventSimulator;
pub use state::{FieldZone, Intensity, MatchPhase, MatchState, Paired, Score, Side, Statistics};
pub use team::{Player, Position, TeamDescriptor, DEFAULT_RATING};

// Internal modules
mod clock;
mod commentary;
mod core;
mod errors;
pub mod players;
mod policy;
mod random;
mod roster;
mod simulator;
mod state;
mod team;
