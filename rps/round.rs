use log::{debug, info};
use std::io::{BufRead, Write};

use rps_game::{evaluate, InvalidMove, Move, MoveSource, Outcome};

use crate::error::RpsError;

pub const PROMPT: &str = "Chose your move: Rock, Paper, or Scissors";
pub const INVALID_CHOICE: &str = "Invalid choice! Please choose Rock, Paper, or Scissors.";

#[derive(Debug, Clone, PartialEq)]
pub enum RoundState {
    AwaitingInput,
    Resolved {
        user: Move,
        computer: Move,
        outcome: Outcome,
    },
    Rejected(InvalidMove),
}

impl RoundState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundState::AwaitingInput)
    }
}

pub struct Round<S> {
    source: S,
    retry: bool,
    state: RoundState,
}

impl<S: MoveSource> Round<S> {
    /// Constructs a round that draws the computer's move from `source`
    pub fn new(source: S, retry: bool) -> Self {
        Self {
            source,
            retry,
            state: RoundState::AwaitingInput,
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Prompts, reads a move and reports the result. Only IO failures are errors,
    /// a bad move ends the round as `Rejected`.
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<RoundState, RpsError> {
        let mut last_invalid: Option<InvalidMove> = None;

        while !self.state.is_terminal() {
            writeln!(output, "{}", PROMPT)?;
            output.flush()?;

            let mut buf = Vec::new();
            let read = input.read_until(b'\n', &mut buf)?;

            // Input closed while retrying, the last bad line was already reported
            if read == 0 {
                if let Some(invalid) = last_invalid.take() {
                    self.state = RoundState::Rejected(invalid);
                    break;
                }
            }

            // Undecodable bytes never name a move
            let line = String::from_utf8_lossy(&buf);
            match line.parse::<Move>() {
                Ok(user) => self.resolve(user, &mut output)?,
                Err(invalid) => {
                    debug!("Rejected input: {}", invalid);
                    writeln!(output, "{}", INVALID_CHOICE)?;
                    if !self.retry || read == 0 {
                        self.state = RoundState::Rejected(invalid);
                    } else {
                        last_invalid = Some(invalid);
                    }
                }
            }
        }
        output.flush()?;

        Ok(self.state.clone())
    }

    fn resolve<W: Write>(&mut self, user: Move, output: &mut W) -> Result<(), RpsError> {
        let computer = self.source.next_move();
        let outcome = evaluate(user, computer);
        info!("{} vs {} => {:?}", user, computer, outcome);

        writeln!(output, "Computer chose: {}", computer)?;
        writeln!(output, "{}", outcome.message())?;

        self.state = RoundState::Resolved {
            user,
            computer,
            outcome,
        };
        Ok(())
    }
}
