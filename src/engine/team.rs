use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use super::errors::EngineError;
use super::random::RandomSource;
use super::roster::generate_roster;

pub const DEFAULT_RATING: u32 = 70;

fn default_rating() -> u32 {
    DEFAULT_RATING
}

/// Coarse playing position; only goalkeepers matter to the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub position: Option<Position>,
    /// Overall rating; informational only
    #[serde(default)]
    pub rating: Option<u32>,
}

impl Player {
    pub fn new(name: impl Into<String>, position: Option<Position>) -> Self {
        Self {
            name: name.into(),
            position,
            rating: None,
        }
    }

    pub fn with_rating(mut self, rating: u32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position == Some(Position::Goalkeeper)
    }
}

/// Read-only description of a side, supplied once when a match is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDescriptor {
    pub name: String,
    #[serde(default)]
    pub stadium: Option<String>,
    #[serde(default = "default_rating")]
    pub attack: u32,
    #[serde(default = "default_rating")]
    pub defense: u32,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub bench: Vec<Player>,
}

impl TeamDescriptor {
    /// A team with default ratings and no roster
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stadium: None,
            attack: DEFAULT_RATING,
            defense: DEFAULT_RATING,
            players: Vec::new(),
            bench: Vec::new(),
        }
    }

    pub fn with_ratings(mut self, attack: u32, defense: u32) -> Self {
        self.attack = attack;
        self.defense = defense;
        self
    }

    pub fn with_stadium(mut self, stadium: impl Into<String>) -> Self {
        self.stadium = Some(stadium.into());
        self
    }

    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }

    pub fn with_bench(mut self, bench: Vec<Player>) -> Self {
        self.bench = bench;
        self
    }

    /// Fills an empty roster with generated players; a supplied roster is kept
    pub fn with_generated_roster(mut self, rng: &mut dyn RandomSource) -> Self {
        if self.players.is_empty() {
            self.players = generate_roster(rng);
        }
        self
    }

    /// Rejects descriptors the engine cannot run a match with
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidTeam(
                "Team name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Ratings used as a ratio divisor; a zero defense would divide by zero
    pub(crate) fn effective_defense(&self) -> f64 {
        f64::from(self.defense.max(1))
    }
}
