//! Madlib: an interactive Mad Libs story game for the terminal.
//!
//! This is the main entry point for the `madlib` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes. Running with no command starts a game.

mod cli;
mod commands;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod prompt;
pub mod session;
pub mod store;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::{Cli, Command, PlayArgs};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse_args();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Play(PlayArgs::default()));

    match commands::dispatch(command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
