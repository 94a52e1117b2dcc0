//! ## Game
//! The rules of a single Rock-Paper-Scissors round.
//! ### Modules
//! - Moves (the three moves and how raw input is turned into one)
//! - Outcome (the result of a round and the beats-relation between moves)
//!
//! ### Example
//! ```
//! use rps_game::{evaluate, Move, Outcome};
//!
//! let user: Move = " ROCK ".parse().unwrap();
//! assert_eq!(evaluate(user, Move::Scissors), Outcome::Win);
//! ```
mod moves;
mod outcome;

pub use moves::{InvalidMove, Move};
pub use outcome::{evaluate, Outcome};

/// Anything able to pick the computer's move for a round.
pub trait MoveSource {
    fn next_move(&mut self) -> Move;
}
