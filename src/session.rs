//! The play session: one round of Mad Libs and the play-again loop.
//!
//! A round is: choose a template, extract its placeholder sequence, collect
//! one word per placeholder, fill the template, display the story, and
//! optionally save it. No state carries across rounds.

use crate::error::{MadlibError, Result};
use crate::events::{Event, EventAction, append_event};
use crate::prompt::{self, LineSource};
use crate::store::StoryStore;
use crate::template::{Template, TemplatePack, fill};
use colored::Colorize;
use serde_json::json;

/// An interactive play session over a template pack.
pub struct Session<'a, L: LineSource> {
    source: L,
    pack: &'a TemplatePack,
    store: StoryStore,
}

impl<'a, L: LineSource> Session<'a, L> {
    pub fn new(source: L, pack: &'a TemplatePack, store: StoryStore) -> Self {
        Session {
            source,
            pack,
            store,
        }
    }

    /// Run rounds until the user declines to continue, then say goodbye.
    ///
    /// A closed input stream at any prompt ends the session the same way a
    /// "no" would.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if !self.play_round()? {
                break;
            }
            if !prompt::confirm(&mut self.source, "Would you like to play again?")? {
                break;
            }
        }

        println!("{}", "Thanks for playing Mad Libs!".bright_cyan().bold());
        Ok(())
    }

    /// Play one round with a randomly chosen template.
    ///
    /// Returns `false` when the input stream closed before the round finished.
    fn play_round(&mut self) -> Result<bool> {
        let template = self.pack.choose().ok_or_else(|| {
            MadlibError::UserError("template pack contains no templates".to_string())
        })?;
        self.round(template)
    }

    /// Play one round with the given template.
    fn round(&mut self, template: &Template) -> Result<bool> {
        println!("{}", "Welcome to Mad Libs!".bright_cyan().bold());
        println!(
            "{}",
            "I'll ask you for some words to fill in the blanks of our story.".yellow()
        );

        let categories = template.placeholders()?;
        let Some(words) = prompt::collect_words(&mut self.source, &categories)? else {
            return Ok(false);
        };

        let story = fill(&template.text, &words);

        println!();
        println!("{}", "Here's your Mad Libs story:".bright_green().bold());
        println!();
        println!("{}", story.bold());
        println!();

        self.log_event(Event::new(EventAction::RoundPlayed).with_details(json!({
            "template": template.title,
            "words": words.len(),
        })));

        if prompt::confirm(&mut self.source, "Would you like to save this story?")? {
            let path = self.store.save(&story)?;
            println!(
                "{}",
                format!("Your story has been saved as {}", path.display()).green()
            );
            self.log_event(Event::new(EventAction::StorySaved).with_details(json!({
                "file": path.file_name().map(|n| n.to_string_lossy().into_owned()),
            })));
        }

        Ok(true)
    }

    /// Best-effort event logging: a failed append must never end the game.
    fn log_event(&self, event: Event) {
        if let Err(err) = append_event(self.store.dir(), &event) {
            log::warn!("failed to record session event: {}", err);
        }
    }
}
