use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::engine::{Score, Statistics};

/// The three kinds of event a match engine emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    MinuteUpdate,
    Commentary,
    MatchEnd,
}

/// Type tag of a commentary line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CommentaryKind {
    Kickoff,
    General,
    Shot,
    Save,
    Goal,
    Foul,
    Card,
    Corner,
    Substitution,
    HalfTime,
    FullTime,
}

/// A rendered line of match commentary
///
/// Events represent facts about things that have already happened. Once
/// emitted the engine keeps no reference to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentaryEvent {
    pub id: Uuid,
    pub minute: u32,
    pub kind: CommentaryKind,
    pub text: String,
    /// Marks red cards
    pub severe: bool,
    pub created_at: DateTime<Utc>,
}

impl CommentaryEvent {
    pub fn new(minute: u32, kind: CommentaryKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            minute,
            kind,
            text: text.into(),
            severe: false,
            created_at: Utc::now(),
        }
    }

    pub fn severe(mut self) -> Self {
        self.severe = true;
        self
    }
}

/// Snapshot emitted at the end of every simulated minute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinuteUpdate {
    pub minute: u32,
    pub score: Score,
    pub statistics: Statistics,
}

/// Terminal payload, emitted exactly once per match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub match_id: String,
    pub home_team: String,
    pub away_team: String,
    pub final_minute: u32,
    pub score: Score,
    pub statistics: Statistics,
    pub completed_at: DateTime<Utc>,
}

/// Output of one simulation step, in emission order
#[derive(Debug, Clone, PartialEq)]
pub enum MatchEvent {
    Commentary(CommentaryEvent),
    Minute(MinuteUpdate),
    End(MatchSummary),
}

impl MatchEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            MatchEvent::Commentary(_) => EventKind::Commentary,
            MatchEvent::Minute(_) => EventKind::MinuteUpdate,
            MatchEvent::End(_) => EventKind::MatchEnd,
        }
    }

    pub fn minute(&self) -> u32 {
        match self {
            MatchEvent::Commentary(event) => event.minute,
            MatchEvent::Minute(update) => update.minute,
            MatchEvent::End(summary) => summary.final_minute,
        }
    }
}
