//! Implementation of the `stories` command.

use super::story_dir;
use crate::cli::StoriesArgs;
use crate::error::Result;
use crate::store::StoryStore;

/// Execute the `stories` command: list saved stories with modified times.
pub fn cmd_stories(args: StoriesArgs) -> Result<()> {
    let store = StoryStore::new(story_dir(args.dir));
    let entries = store.list()?;

    if entries.is_empty() {
        println!("No saved stories in '{}'.", store.dir().display());
        return Ok(());
    }

    println!("Saved stories ({}):", entries.len());
    println!();

    for entry in &entries {
        match entry.modified {
            Some(modified) => println!(
                "  story_{}.txt  {}",
                entry.number,
                modified.format("%Y-%m-%d %H:%M")
            ),
            None => println!("  story_{}.txt", entry.number),
        }
    }

    println!();
    println!("Use `madlib show <number>` to read one.");

    Ok(())
}
