use std::time::Duration;

use matchday::engine::{Player, Position, TeamDescriptor};
use matchday::EngineConfig;

/// Builder for team descriptors used across tests
pub struct TeamBuilder {
    team: TeamDescriptor,
}

#[allow(dead_code)]
impl TeamBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            team: TeamDescriptor::named(name),
        }
    }

    pub fn ratings(mut self, attack: u32, defense: u32) -> Self {
        self.team = self.team.with_ratings(attack, defense);
        self
    }

    pub fn keeper(mut self, name: &str) -> Self {
        self.team
            .players
            .push(Player::new(name, Some(Position::Goalkeeper)));
        self
    }

    pub fn player(mut self, name: &str, position: Position) -> Self {
        self.team.players.push(Player::new(name, Some(position)));
        self
    }

    pub fn substitute(mut self, name: &str) -> Self {
        self.team.bench.push(Player::new(name, None));
        self
    }

    pub fn build(self) -> TeamDescriptor {
        self.team
    }
}

#[allow(dead_code)]
pub fn rostered_team(name: &str) -> TeamDescriptor {
    TeamBuilder::new(name)
        .keeper(&format!("{} Keeper", name))
        .player(&format!("{} Back", name), Position::Defender)
        .player(&format!("{} Mid", name), Position::Midfielder)
        .player(&format!("{} Nine", name), Position::Forward)
        .substitute(&format!("{} Sub", name))
        .build()
}

/// Default timing (3s minutes, 5-15s commentary) with a fixed seed
#[allow(dead_code)]
pub fn fast_config(seed: u64) -> EngineConfig {
    EngineConfig::default()
        .with_seed(seed)
        .with_commentary_delay(Duration::from_secs(5), Duration::from_secs(15))
        .with_minute_period(Duration::from_secs(3))
}
