use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rps_game::{Move, MoveSource};

/// Uniformly random computer moves
pub struct RandomMoves {
    rng: StdRng,
}

impl RandomMoves {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for RandomMoves {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
    }
}
