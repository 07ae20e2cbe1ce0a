//! Implementation of the `show` command.

use super::story_dir;
use crate::cli::ShowArgs;
use crate::error::Result;
use crate::store::StoryStore;

/// Execute the `show` command: print one saved story.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let store = StoryStore::new(story_dir(args.dir));
    let story = store.load(args.number)?;

    println!("{}", story);
    Ok(())
}
