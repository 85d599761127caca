use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

use crate::engine::TeamDescriptor;
use crate::event::{CommentaryEvent, CommentaryKind, MatchSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum MatchStatus {
    Live,
    Completed,
}

/// Stored form of one commentary line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentaryRecord {
    pub id: Uuid,
    pub minute: u32,
    pub kind: CommentaryKind,
    pub text: String,
    pub severe: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&CommentaryEvent> for CommentaryRecord {
    fn from(event: &CommentaryEvent) -> Self {
        Self {
            id: event.id,
            minute: event.minute,
            kind: event.kind,
            text: event.text.clone(),
            severe: event.severe,
            created_at: event.created_at,
        }
    }
}

/// Everything persisted about a match, keyed by its id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub stadium: Option<String>,
    pub status: MatchStatus,
    pub commentary: Vec<CommentaryRecord>,
    pub summary: Option<MatchSummary>,
    pub created_at: DateTime<Utc>,
}

impl MatchRecord {
    /// A fresh live record for a match between two teams
    pub fn new(id: impl Into<String>, home: &TeamDescriptor, away: &TeamDescriptor) -> Self {
        Self {
            id: id.into(),
            home_team: home.name.clone(),
            away_team: away.name.clone(),
            stadium: home.stadium.clone(),
            status: MatchStatus::Live,
            commentary: Vec::new(),
            summary: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }
}
