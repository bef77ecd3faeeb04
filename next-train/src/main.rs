use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use next_train::cli::{AppError, Cli, run, write_usage};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Printing can only fail if the terminal is gone; the exit code
        // still reports the outcome.
        Err(e) if !e.use_stderr() => {
            // --help / --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            let _ = write_usage(&mut io::stdout());
            return ExitCode::from(2);
        }
    };

    // Log to stderr so menus and results on stdout stay clean
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let command = cli.command();
    tracing::debug!(?command, "starting");

    match run(command).await {
        Ok(code) => code,
        Err(AppError::Lookup(e)) => {
            tracing::debug!(name = e.requested(), "lookup failed");
            println!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
