//! Command implementations for madlib.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, one file per command.

mod play;
mod show;
mod stories;
mod templates;

use crate::cli::Command;
use crate::error::Result;
use crate::store::DEFAULT_STORY_DIR;
use std::path::PathBuf;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Play(args) => play::cmd_play(args),
        Command::Templates(args) => templates::cmd_templates(args),
        Command::Stories(args) => stories::cmd_stories(args),
        Command::Show(args) => show::cmd_show(args),
    }
}

/// Resolve an optional `--dir` argument to the story directory.
fn story_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| PathBuf::from(DEFAULT_STORY_DIR))
}
