use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Canonical lowercase name, also what input is matched against
    pub fn name(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    pub fn beats(&self, other: Move) -> bool {
        use Move::*;

        match (*self, other) {
            (Rock, Scissors) | (Scissors, Paper) | (Paper, Rock) => true,
            (Rock, Rock) | (Paper, Paper) | (Scissors, Scissors) => false,
            (Rock, Paper) | (Paper, Scissors) | (Scissors, Rock) => false,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = InvalidMove;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let normalized = trimmed.to_lowercase();
        Move::ALL
            .iter()
            .copied()
            .find(|m| m.name() == normalized)
            .ok_or_else(|| InvalidMove(trimmed.to_owned()))
    }
}

/// Input that does not name one of the three moves. Holds the trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMove(pub String);

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}' is not one of rock, paper or scissors", self.0)
    }
}

impl std::error::Error for InvalidMove {}
