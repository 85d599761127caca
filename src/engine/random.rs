use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Single source of every random draw the engine makes.
///
/// All derived draws are built on `next_unit`, so a scripted source can
/// steer the simulator through any branch.
pub trait RandomSource: Send {
    /// Uniform draw in [0, 1)
    fn next_unit(&mut self) -> f64;

    /// Bernoulli trial that succeeds when the draw falls below `probability`
    fn chance(&mut self, probability: f64) -> bool {
        self.next_unit() < probability
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let index = (self.next_unit() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }

    /// Uniform integer in `low..=high`
    fn between(&mut self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        let span = high - low + 1;
        low + self.pick_index(span as usize) as u64
    }
}

/// `StdRng`-backed source; seeded for reproducible matches
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed queue of draws, then repeats a fallback value
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRandom {
    /// The default fallback (0.99) fails every event trial
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback: 0.99,
        }
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = SeededRandom::from_seed(7);
        let mut b = SeededRandom::from_seed(7);

        for _ in 0..20 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_seeded_draws_stay_in_unit_interval() {
        let mut source = SeededRandom::from_seed(99);
        for _ in 0..1000 {
            let draw = source.next_unit();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[rstest]
    #[case(0.0, 3, 0)]
    #[case(0.34, 3, 1)]
    #[case(0.999, 3, 2)]
    #[case(0.5, 1, 0)]
    fn test_pick_index(#[case] draw: f64, #[case] len: usize, #[case] expected: usize) {
        let mut source = ScriptedRandom::new([draw]);
        assert_eq!(source.pick_index(len), expected);
    }

    #[rstest]
    #[case(0.0, 1)]
    #[case(0.5, 2)]
    #[case(0.99, 3)]
    fn test_between_is_inclusive(#[case] draw: f64, #[case] expected: u64) {
        let mut source = ScriptedRandom::new([draw]);
        assert_eq!(source.between(1, 3), expected);
    }

    #[test]
    fn test_scripted_falls_back_when_exhausted() {
        let mut source = ScriptedRandom::new([0.1]).with_fallback(0.5);

        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.remaining(), 0);
        assert_eq!(source.next_unit(), 0.5);
        assert!(!source.chance(0.5));
    }
}
