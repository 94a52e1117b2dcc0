use clap::{App, Arg, ArgMatches};
use log::info;
use std::default;
use std::ffi::OsString;

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub retry: bool,
    pub seed: Option<u64>,
    pub strict_exit: bool,
    pub verbose: bool,
}

fn app<'a, 'b>() -> App<'a, 'b> {
    let version = env!("CARGO_PKG_VERSION");
    let authors = env!("CARGO_PKG_AUTHORS");

    App::new("Rock Paper Scissors")
        .version(version)
        .author(authors)
        .arg(
            Arg::with_name("RETRY")
                .short("r")
                .long("retry")
                .help("If specified, an invalid move prompts again instead of ending the round"),
        )
        .arg(
            Arg::with_name("SEED")
                .short("s")
                .long("seed")
                .takes_value(true)
                .value_name("SEED")
                .validator(|v| v.parse::<u64>().map(|_| ()).map_err(|e| e.to_string()))
                .help("Seeds the computer's choices so a session can be replayed"),
        )
        .arg(
            Arg::with_name("STRICT_EXIT")
                .short("x")
                .long("strict-exit")
                .help("If specified, a rejected move exits with status 1"),
        )
        .arg(
            Arg::with_name("VERBOSE")
                .short("v")
                .long("verbose")
                .help("If specified, debug output is logged to stderr"),
        )
}

impl CliConfig {
    /// Reads the configuration from the process arguments, exiting with usage on error
    pub fn new() -> Self {
        Self::from_matches(&app().get_matches())
    }

    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(args)?;
        Ok(Self::from_matches(&matches))
    }

    fn from_matches(args: &ArgMatches) -> Self {
        Self {
            retry: args.is_present("RETRY"),
            seed: args.value_of("SEED").and_then(|s| s.parse().ok()),
            strict_exit: args.is_present("STRICT_EXIT"),
            verbose: args.is_present("VERBOSE"),
        }
    }

    pub fn log(&self) {
        info!("[Config]");

        let mut default = false;
        if self == &CliConfig::default() {
            default = true;
        }

        info!("Default: {}", default);
        info!("| RETRY: {}", self.retry);
        info!("| SEED: {:?}", self.seed);
        info!("| STRICT_EXIT: {}", self.strict_exit);
        info!("| VERBOSE: {}", self.verbose);
    }
}

impl default::Default for CliConfig {
    fn default() -> Self {
        Self {
            retry: false,
            seed: None,
            strict_exit: false,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_is_default() {
        let config = CliConfig::from_args(vec!["rps"]).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn short_flags() {
        let config = CliConfig::from_args(vec!["rps", "-r", "-x", "-v", "-s", "42"]).unwrap();
        assert_eq!(
            config,
            CliConfig {
                retry: true,
                seed: Some(42),
                strict_exit: true,
                verbose: true,
            }
        );
    }

    #[test]
    fn long_flags() {
        let config = CliConfig::from_args(vec!["rps", "--retry", "--seed", "7"]).unwrap();
        assert!(config.retry);
        assert_eq!(config.seed, Some(7));
        assert!(!config.strict_exit);
        assert!(!config.verbose);
    }

    #[test]
    fn bad_seed_is_rejected() {
        assert!(CliConfig::from_args(vec!["rps", "--seed", "lots"]).is_err());
        assert!(CliConfig::from_args(vec!["rps", "--seed", "-1"]).is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(CliConfig::from_args(vec!["rps", "--rounds", "3"]).is_err());
    }
}
