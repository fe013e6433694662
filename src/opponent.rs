//! Computer opponents.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::gesture::Move;

/// Chooses the computer's move for a round.
pub trait Opponent {
    /// Picks the next move.
    fn pick(&mut self) -> Move;
}

/// Any `FnMut() -> Move` closure is an opponent, which makes fixed or
/// scripted draws easy to set up.
impl<F: FnMut() -> Move> Opponent for F {
    fn pick(&mut self) -> Move {
        self()
    }
}

/// An opponent that picks uniformly at random from a seeded RNG.
#[derive(Debug, Clone)]
pub struct SeededOpponent {
    rng: ChaCha8Rng,
}

impl SeededOpponent {
    /// Creates a new opponent with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Opponent for SeededOpponent {
    fn pick(&mut self) -> Move {
        Move::ALL[self.rng.random_range(0..Move::ALL.len())]
    }
}
