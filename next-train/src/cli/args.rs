//! Command-line arguments and mode dispatch.

use clap::{ArgAction, Parser};

/// Next MBTA subway departure for a route, stop and direction.
#[derive(Debug, Parser)]
#[command(name = "next-train", version)]
pub struct Cli {
    /// More log output on stderr (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Nothing for interactive mode, `test`, `help`, or ROUTE STOP DIRECTION
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    pub fn command(&self) -> Command {
        Command::from_args(&self.args)
    }

    /// Log filter used when RUST_LOG is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "next_train=debug",
            _ => "next_train=trace",
        }
    }
}

/// What a run does, decided once from the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Menus on stdin/stdout until the user quits.
    Interactive,
    /// Check every route, stop and direction against the live API.
    SelfTest,
    /// Print usage.
    Help,
    /// Arguments of the wrong shape: print usage and fail.
    BadUsage,
    /// One lookup from command-line names.
    Lookup {
        route: String,
        stop: String,
        direction: String,
    },
}

impl Command {
    pub fn from_args(args: &[String]) -> Self {
        match args {
            [] => Command::Interactive,
            [only] if only == "test" => Command::SelfTest,
            [only] if only == "help" => Command::Help,
            [route, stop, direction] => Command::Lookup {
                route: route.clone(),
                stop: stop.clone(),
                direction: direction.clone(),
            },
            _ => Command::BadUsage,
        }
    }
}
