use serde::{Deserialize, Serialize};

use crate::engine::{MatchPhase, MatchState, TeamDescriptor};

/// Request payload for starting a new match
#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    pub home: TeamDescriptor,
    pub away: TeamDescriptor,
}

/// Response for lifecycle calls: the phase the match is in afterwards
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchPhaseResponse {
    pub match_id: String,
    pub phase: MatchPhase,
}

/// Live view of a running match
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchStateResponse {
    pub match_id: String,
    pub phase: MatchPhase,
    pub state: MatchState,
}
