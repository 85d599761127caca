// Player selection for commentary. Every draw falls back to a fixed name
// pool so a team without a roster still produces readable text.

use super::random::RandomSource;
use super::team::TeamDescriptor;

pub const FALLBACK_PLAYERS: [&str; 10] = [
    "Silva", "Santos", "Oliveira", "Souza", "Lima", "Pereira", "Costa", "Rodrigues", "Almeida",
    "Nascimento",
];

pub const FALLBACK_GOALKEEPERS: [&str; 2] = ["Ferreira", "Carvalho"];

pub const FALLBACK_SUBSTITUTES: [&str; 10] = [
    "Gomes", "Martins", "Araujo", "Barbosa", "Ribeiro", "Rocha", "Dias", "Teixeira", "Moreira",
    "Cardoso",
];

fn pick<S: AsRef<str>>(names: &[S], rng: &mut dyn RandomSource) -> String {
    names[rng.pick_index(names.len())].as_ref().to_string()
}

/// Uniform over the listed roster, else the generic pool
pub fn random_player(team: &TeamDescriptor, rng: &mut dyn RandomSource) -> String {
    if team.players.is_empty() {
        return pick(&FALLBACK_PLAYERS, rng);
    }
    let names: Vec<&str> = team.players.iter().map(|p| p.name.as_str()).collect();
    pick(&names, rng)
}

/// Uniform over roster entries tagged as goalkeepers, else the keeper pool
pub fn random_goalkeeper(team: &TeamDescriptor, rng: &mut dyn RandomSource) -> String {
    let keepers: Vec<&str> = team
        .players
        .iter()
        .filter(|p| p.is_goalkeeper())
        .map(|p| p.name.as_str())
        .collect();

    if keepers.is_empty() {
        return pick(&FALLBACK_GOALKEEPERS, rng);
    }
    pick(&keepers, rng)
}

/// Uniform over the bench, else the generic substitute pool
pub fn random_substitute(team: &TeamDescriptor, rng: &mut dyn RandomSource) -> String {
    if team.bench.is_empty() {
        return pick(&FALLBACK_SUBSTITUTES, rng);
    }
    let names: Vec<&str> = team.bench.iter().map(|p| p.name.as_str()).collect();
    pick(&names, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::random::ScriptedRandom;
    use crate::engine::team::{Player, Position};
    use rstest::rstest;

    fn rostered_team() -> TeamDescriptor {
        TeamDescriptor::named("Rovers")
            .with_players(vec![
                Player::new("Keeper", Some(Position::Goalkeeper)),
                Player::new("Striker", Some(Position::Forward)),
                Player::new("Winger", None),
            ])
            .with_bench(vec![Player::new("Reserve", Some(Position::Midfielder))])
    }

    #[rstest]
    #[case(0.0, "Silva")]
    #[case(0.95, "Nascimento")]
    fn test_random_player_falls_back_to_pool(#[case] draw: f64, #[case] expected: &str) {
        let mut rng = ScriptedRandom::new([draw]);
        let name = random_player(&TeamDescriptor::named("Empty"), &mut rng);
        assert_eq!(name, expected);
    }

    #[test]
    fn test_random_player_uses_roster() {
        let mut rng = ScriptedRandom::new([0.5]);
        assert_eq!(random_player(&rostered_team(), &mut rng), "Striker");
    }

    #[test]
    fn test_random_goalkeeper_only_picks_keepers() {
        let team = rostered_team();
        for draw in [0.0, 0.3, 0.6, 0.99] {
            let mut rng = ScriptedRandom::new([draw]);
            assert_eq!(random_goalkeeper(&team, &mut rng), "Keeper");
        }
    }

    #[rstest]
    #[case(0.1, "Ferreira")]
    #[case(0.9, "Carvalho")]
    fn test_random_goalkeeper_fallback(#[case] draw: f64, #[case] expected: &str) {
        let team = TeamDescriptor::named("No Keeper")
            .with_players(vec![Player::new("Outfield", Some(Position::Defender))]);
        let mut rng = ScriptedRandom::new([draw]);
        assert_eq!(random_goalkeeper(&team, &mut rng), expected);
    }

    #[test]
    fn test_random_substitute_uses_bench_then_pool() {
        let mut rng = ScriptedRandom::new([0.7, 0.0]);
        assert_eq!(random_substitute(&rostered_team(), &mut rng), "Reserve");
        assert_eq!(
            random_substitute(&TeamDescriptor::named("Empty"), &mut rng),
            "Gomes"
        );
    }
}
