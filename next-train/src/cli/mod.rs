//! Command-line front end.
//!
//! Argument parsing picks a [`Command`]; [`run`] carries it out against a
//! fresh [`Session`] on the real MBTA API.

mod args;
mod help;
mod modes;
mod prompt;

use std::io;
use std::process::ExitCode;

use crate::cache::CacheConfig;
use crate::clock::SystemClock;
use crate::domain::{Direction, InvalidDirection, LookupError};
use crate::mbta::{ApiError, HttpTransport, MbtaClient, MbtaConfig};
use crate::session::Session;

pub use args::{Cli, Command};
pub use help::{USAGE, write_usage};
pub use modes::{interactive, lookup, sweep};
pub use prompt::{Prompter, Reply};

/// Anything that ends a run early.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    InvalidDirection(#[from] InvalidDirection),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Carry out `command`, writing to stdout and reading stdin.
pub async fn run(command: Command) -> Result<ExitCode, AppError> {
    let mut stdout = io::stdout();

    match command {
        Command::Help => {
            write_usage(&mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::BadUsage => {
            write_usage(&mut stdout)?;
            Ok(ExitCode::from(2))
        }
        Command::Lookup {
            route,
            stop,
            direction,
        } => {
            let direction: Direction = direction.parse()?;
            let session = start_session().await?;
            lookup(&session, &mut stdout, &route, &stop, direction).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::SelfTest => {
            let session = start_session().await?;
            sweep(&session, &mut stdout).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Interactive => {
            let session = start_session().await?;
            let mut prompter = Prompter::new(io::stdin().lock(), stdout);
            interactive(&session, &mut prompter).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn start_session() -> Result<Session<HttpTransport, SystemClock>, ApiError> {
    let client = MbtaClient::new(MbtaConfig::default())?;
    Session::start(client, &CacheConfig::default()).await
}
