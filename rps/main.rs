use log::{debug, info};
use std::io::{self, BufRead, Write};

use rps_cli::CliConfig;

mod error;
mod log_init;
mod round;
#[cfg(test)]
mod test_util;
mod util;
use error::RpsError;
use round::{Round, RoundState};
use util::RandomMoves;

/// Maps how a round ended onto the process result
fn finish(state: RoundState, strict_exit: bool) -> Result<(), RpsError> {
    match state {
        RoundState::Rejected(invalid) if strict_exit => Err(invalid.into()),
        state => {
            debug!("Round finished: {:?}", state);
            Ok(())
        }
    }
}

fn run<R: BufRead, W: Write>(config: &CliConfig, input: R, output: W) -> Result<(), RpsError> {
    let source = match config.seed {
        Some(seed) => RandomMoves::seeded(seed),
        None => RandomMoves::from_entropy(),
    };

    let mut round = Round::new(source, config.retry);
    let state = round.play(input, output)?;
    finish(state, config.strict_exit)
}

fn main() {
    let config = CliConfig::new();
    log_init::init(config.verbose);
    info!("Starting Rock Paper Scissors...");
    config.log();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&config, stdin.lock(), stdout.lock()) {
        match e {
            RpsError::InvalidMove(_) => debug!("Exiting strictly: {}", e),
            RpsError::Io(_) => eprintln!("Error playing round: {}", e),
        }
        std::process::exit(e.exit_code());
    }
}
