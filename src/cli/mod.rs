//! CLI argument parsing for madlib.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Madlib: an interactive Mad Libs story game for the terminal.
///
/// Pick a story template, fill in the blanks one word at a time, and read
/// the result. Stories can be saved as numbered text files.
#[derive(Parser, Debug)]
#[command(name = "madlib")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to run. Running `madlib` with no command starts a game.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands for madlib.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play rounds of Mad Libs interactively.
    ///
    /// Prompts for one word per blank, shows the completed story, and
    /// offers to save it. Repeats until you decline to continue.
    Play(PlayArgs),

    /// List the available story templates.
    ///
    /// Shows each template's title and the words it needs.
    Templates(TemplatesArgs),

    /// List saved stories.
    Stories(StoriesArgs),

    /// Print a saved story.
    Show(ShowArgs),
}

/// Arguments for the `play` command.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Load templates from a YAML pack file instead of the built-in set.
    #[arg(long, value_name = "FILE")]
    pub templates: Option<PathBuf>,

    /// Directory where saved stories are written [default: mad_libs_stories]
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Arguments for the `templates` command.
#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Load templates from a YAML pack file instead of the built-in set.
    #[arg(long, value_name = "FILE")]
    pub templates: Option<PathBuf>,
}

/// Arguments for the `stories` command.
#[derive(Args, Debug)]
pub struct StoriesArgs {
    /// Directory holding saved stories [default: mad_libs_stories]
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// The story number (e.g. 3 for story_3.txt).
    pub number: u32,

    /// Directory holding saved stories [default: mad_libs_stories]
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
