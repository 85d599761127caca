use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldZone {
    Defense,
    Midfield,
    Attack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Intensity {
    Low,
    Normal,
    High,
}

/// Lifecycle of a match engine: Created -> Running <-> Paused -> Ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchPhase {
    Created,
    Running,
    Paused,
    Ended,
}

/// A (home, away) pair of values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paired<T> {
    pub home: T,
    pub away: T,
}

impl<T> Paired<T> {
    pub fn new(home: T, away: T) -> Self {
        Self { home, away }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }
}

pub type Score = Paired<u32>;

impl Score {
    pub fn total(&self) -> u32 {
        self.home + self.away
    }
}

/// Cumulative match statistics. Possession is a percentage split that always
/// sums to 100; every other counter only increments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub possession: Paired<u32>,
    pub shots: Paired<u32>,
    pub shots_on_target: Paired<u32>,
    pub corners: Paired<u32>,
    pub fouls: Paired<u32>,
    pub yellow_cards: Paired<u32>,
    pub red_cards: Paired<u32>,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            possession: Paired::new(50, 50),
            shots: Paired::default(),
            shots_on_target: Paired::default(),
            corners: Paired::default(),
            fouls: Paired::default(),
            yellow_cards: Paired::default(),
            red_cards: Paired::default(),
        }
    }
}

impl Statistics {
    /// Moves `points` of the possession split toward `side`, clamped to [0, 100]
    pub fn shift_possession(&mut self, toward: Side, points: u32) {
        let home = match toward {
            Side::Home => self.possession.home.saturating_add(points).min(100),
            Side::Away => self.possession.home.saturating_sub(points),
        };
        self.possession = Paired::new(home, 100 - home);
    }
}

/// Everything the engine mutates during a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub minute: u32,
    pub score: Score,
    pub possession: Side,
    pub field_zone: FieldZone,
    pub intensity: Intensity,
    pub statistics: Statistics,
    pub is_running: bool,
}

impl MatchState {
    pub fn new(possession: Side) -> Self {
        Self {
            minute: 0,
            score: Score::default(),
            possession,
            field_zone: FieldZone::Midfield,
            intensity: Intensity::Normal,
            statistics: Statistics::default(),
            is_running: false,
        }
    }

    pub fn defending(&self) -> Side {
        self.possession.opponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Side::Home, 3, 53)]
    #[case(Side::Away, 2, 48)]
    fn test_possession_shift_keeps_split_complementary(
        #[case] toward: Side,
        #[case] points: u32,
        #[case] expected_home: u32,
    ) {
        let mut stats = Statistics::default();
        stats.shift_possession(toward, points);

        assert_eq!(stats.possession.home, expected_home);
        assert_eq!(stats.possession.home + stats.possession.away, 100);
    }

    #[rstest]
    #[case(Side::Home, 99, 100)]
    #[case(Side::Away, 2, 0)]
    fn test_possession_shift_clamps(
        #[case] toward: Side,
        #[case] start_home: u32,
        #[case] expected_home: u32,
    ) {
        let mut stats = Statistics::default();
        stats.possession = Paired::new(start_home, 100 - start_home);
        stats.shift_possession(toward, 3);

        assert_eq!(stats.possession.home, expected_home);
        assert_eq!(stats.possession.away, 100 - expected_home);
    }

    #[test]
    fn test_new_state_starts_in_midfield() {
        let state = MatchState::new(Side::Away);

        assert_eq!(state.minute, 0);
        assert_eq!(state.score.total(), 0);
        assert_eq!(state.field_zone, FieldZone::Midfield);
        assert_eq!(state.defending(), Side::Home);
        assert!(!state.is_running);
    }

    #[test]
    fn test_paired_access_by_side() {
        let mut pair = Paired::new(1, 2);
        *pair.get_mut(Side::Away) += 5;

        assert_eq!(*pair.get(Side::Home), 1);
        assert_eq!(*pair.get(Side::Away), 7);
    }
}
