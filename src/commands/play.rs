//! Implementation of the `play` command.

use super::story_dir;
use crate::cli::PlayArgs;
use crate::error::Result;
use crate::prompt::Readline;
use crate::session::Session;
use crate::store::StoryStore;
use crate::template::TemplatePack;

/// Execute the `play` command: run the interactive session loop.
pub fn cmd_play(args: PlayArgs) -> Result<()> {
    let pack = TemplatePack::load_or_builtin(args.templates.as_deref())?;
    let store = StoryStore::new(story_dir(args.dir));
    let source = Readline::new()?;

    let mut session = Session::new(source, &pack, store);
    session.run()
}
