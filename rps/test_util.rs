use rps_game::{Move, MoveSource};

/// Always plays the same move
pub struct FixedMoves(pub Move);

impl MoveSource for FixedMoves {
    fn next_move(&mut self) -> Move {
        self.0
    }
}
