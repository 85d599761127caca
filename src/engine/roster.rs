// Roster source for teams that arrive without players. Slot one is always
// a goalkeeper so saves name a real keeper.

use strum::IntoEnumIterator;

use super::random::RandomSource;
use super::team::{Player, Position};

pub const ROSTER_SIZE: usize = 11;
pub const MIN_PLAYER_RATING: u32 = 50;
pub const MAX_PLAYER_RATING: u32 = 90;

const FIRST_NAMES: [&str; 12] = [
    "Lucas", "Mateo", "Rafael", "Tiago", "Bruno", "Diego", "Hugo", "Marco", "Nico", "Pablo",
    "Andre", "Joao",
];

const SURNAMES: [&str; 12] = [
    "Moura", "Vieira", "Pinto", "Castro", "Mendes", "Freitas", "Nunes", "Lopes", "Reis",
    "Azevedo", "Correia", "Monteiro",
];

/// One player with a pooled name and an overall rating in 50..=90.
///
/// Draws: first name, surname, rating.
pub fn generate_player(position: Position, rng: &mut dyn RandomSource) -> Player {
    let first = FIRST_NAMES[rng.pick_index(FIRST_NAMES.len())];
    let surname = SURNAMES[rng.pick_index(SURNAMES.len())];
    let rating = rng.between(u64::from(MIN_PLAYER_RATING), u64::from(MAX_PLAYER_RATING)) as u32;

    Player::new(format!("{} {}", first, surname), Some(position)).with_rating(rating)
}

/// Eleven players: a goalkeeper, then ten outfield players in random positions
pub fn generate_roster(rng: &mut dyn RandomSource) -> Vec<Player> {
    let outfield: Vec<Position> = Position::iter()
        .filter(|position| *position != Position::Goalkeeper)
        .collect();

    let mut roster = Vec::with_capacity(ROSTER_SIZE);
    roster.push(generate_player(Position::Goalkeeper, rng));
    while roster.len() < ROSTER_SIZE {
        let position = outfield[rng.pick_index(outfield.len())];
        roster.push(generate_player(position, rng));
    }
    roster
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::random::{ScriptedRandom, SeededRandom};
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(7)]
    #[case(42)]
    #[case(2024)]
    fn test_generated_roster_is_full_and_has_a_keeper(#[case] seed: u64) {
        let mut rng = SeededRandom::from_seed(seed);
        let roster = generate_roster(&mut rng);

        assert_eq!(roster.len(), ROSTER_SIZE);
        assert!(roster[0].is_goalkeeper());
        assert_eq!(roster.iter().filter(|p| p.is_goalkeeper()).count(), 1);
        for player in &roster {
            let rating = player.rating.unwrap();
            assert!((MIN_PLAYER_RATING..=MAX_PLAYER_RATING).contains(&rating));
            assert!(player.name.contains(' '));
        }
    }

    #[rstest]
    #[case(0.0, "Lucas Moura", MIN_PLAYER_RATING)]
    #[case(0.99, "Joao Monteiro", MAX_PLAYER_RATING)]
    fn test_player_draws_name_then_rating(
        #[case] draw: f64,
        #[case] name: &str,
        #[case] rating: u32,
    ) {
        let mut rng = ScriptedRandom::new([]).with_fallback(draw);
        let player = generate_player(Position::Defender, &mut rng);

        assert_eq!(player.name, name);
        assert_eq!(player.rating, Some(rating));
        assert_eq!(player.position, Some(Position::Defender));
    }

    #[test]
    fn test_outfield_positions_follow_the_draw() {
        // every draw 0.99: outfield slots land on the last outfield position
        let mut rng = ScriptedRandom::new([]).with_fallback(0.99);
        let roster = generate_roster(&mut rng);

        assert!(roster[1..]
            .iter()
            .all(|p| p.position == Some(Position::Forward)));
    }
}
