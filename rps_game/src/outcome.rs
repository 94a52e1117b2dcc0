use crate::moves::Move;

/// Result of a round, from the human player's side
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn invert(&self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Draw => Self::Draw,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Win => "You win!",
            Self::Lose => "You lose!",
            Self::Draw => "It's a draw!",
        }
    }
}

pub fn evaluate(user: Move, computer: Move) -> Outcome {
    if user == computer {
        Outcome::Draw
    } else if user.beats(computer) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_move_draws() {
        for m in Move::ALL.iter() {
            assert_eq!(evaluate(*m, *m), Outcome::Draw);
        }
    }

    #[test]
    fn winning_pairs() {
        assert_eq!(evaluate(Move::Rock, Move::Scissors), Outcome::Win);
        assert_eq!(evaluate(Move::Scissors, Move::Paper), Outcome::Win);
        assert_eq!(evaluate(Move::Paper, Move::Rock), Outcome::Win);
    }

    #[test]
    fn losing_pairs() {
        assert_eq!(evaluate(Move::Scissors, Move::Rock), Outcome::Lose);
        assert_eq!(evaluate(Move::Paper, Move::Scissors), Outcome::Lose);
        assert_eq!(evaluate(Move::Rock, Move::Paper), Outcome::Lose);
    }

    #[test]
    fn swapping_players_inverts() {
        for a in Move::ALL.iter() {
            for b in Move::ALL.iter() {
                let forward = evaluate(*a, *b);
                assert_eq!(evaluate(*b, *a), forward.invert());
                if a != b {
                    assert_ne!(forward, Outcome::Draw);
                }
            }
        }
    }

    #[test]
    fn agrees_with_beats() {
        for a in Move::ALL.iter() {
            for b in Move::ALL.iter() {
                let win = evaluate(*a, *b) == Outcome::Win;
                assert_eq!(win, a.beats(*b));
            }
        }
    }

    #[test]
    fn messages() {
        assert_eq!(Outcome::Win.message(), "You win!");
        assert_eq!(Outcome::Lose.message(), "You lose!");
        assert_eq!(Outcome::Draw.message(), "It's a draw!");
    }
}
