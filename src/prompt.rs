//! Interactive prompts: word collection and yes/no confirmation.
//!
//! Input goes through the `LineSource` trait so the retry loops are
//! testable with scripted input; the real implementation wraps rustyline
//! for line editing and history.

use crate::error::{MadlibError, Result};
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// A source of user-typed lines.
pub trait LineSource {
    /// Read one line, displaying `prompt`. Returns `None` when the input
    /// stream is closed (EOF).
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive line source backed by rustyline.
pub struct Readline {
    editor: DefaultEditor,
}

impl Readline {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()
            .map_err(|e| MadlibError::Input(format!("failed to initialize line editor: {}", e)))?;
        Ok(Readline { editor })
    }
}

impl LineSource for Readline {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.trim());
                    }
                    return Ok(Some(line));
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C discards the current entry and prompts again.
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(MadlibError::Input(format!("readline error: {}", err))),
            }
        }
    }
}

/// Prompt for a word of the given category, retrying until a non-empty
/// trimmed response is given.
///
/// Returns `None` when the input stream is closed before a word is entered.
pub fn collect_word<L: LineSource>(source: &mut L, category: &str) -> Result<Option<String>> {
    loop {
        let Some(line) = source.read_line(&format!("Enter a(n) {}: ", category))? else {
            return Ok(None);
        };

        let word = line.trim();
        if !word.is_empty() {
            return Ok(Some(word.to_string()));
        }

        println!(
            "{}",
            "Oops! You didn't enter anything. Please try again.".red()
        );
    }
}

/// Collect one word per category, in order.
///
/// Returns `None` when the input stream closes mid-collection.
pub fn collect_words<L: LineSource>(
    source: &mut L,
    categories: &[String],
) -> Result<Option<Vec<String>>> {
    let mut words = Vec::with_capacity(categories.len());
    for category in categories {
        match collect_word(source, category)? {
            Some(word) => words.push(word),
            None => return Ok(None),
        }
    }
    Ok(Some(words))
}

/// Interpret a yes/no answer. Only a response starting with `y` (any case)
/// is affirmative; everything else, including an empty line, is negative.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase().starts_with('y')
}

/// Ask a yes/no question. A closed input stream counts as "no".
pub fn confirm<L: LineSource>(source: &mut L, question: &str) -> Result<bool> {
    let line = source.read_line(&format!("{} (yes/no): ", question))?;
    Ok(line.map(|answer| is_affirmative(&answer)).unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedSource;

    #[test]
    fn collect_word_returns_trimmed_word() {
        let mut source = ScriptedSource::new(["  dog  "]);
        let word = collect_word(&mut source, "noun").unwrap();
        assert_eq!(word.as_deref(), Some("dog"));
    }

    #[test]
    fn collect_word_retries_on_empty_and_whitespace() {
        let mut source = ScriptedSource::new(["", "   ", "dog"]);
        let word = collect_word(&mut source, "noun").unwrap();
        assert_eq!(word.as_deref(), Some("dog"));
    }

    #[test]
    fn collect_word_returns_none_on_eof() {
        let mut source = ScriptedSource::new(Vec::<String>::new());
        assert_eq!(collect_word(&mut source, "noun").unwrap(), None);
    }

    #[test]
    fn collect_word_accepts_marker_like_text() {
        let mut source = ScriptedSource::new(["{noun}"]);
        let word = collect_word(&mut source, "noun").unwrap();
        assert_eq!(word.as_deref(), Some("{noun}"));
    }

    #[test]
    fn collect_words_gathers_one_word_per_category() {
        let mut source = ScriptedSource::new(["fast", "", "car"]);
        let categories = vec!["adjective".to_string(), "noun".to_string()];

        let words = collect_words(&mut source, &categories).unwrap().unwrap();
        assert_eq!(words, vec!["fast", "car"]);
    }

    #[test]
    fn collect_words_returns_none_when_input_closes_midway() {
        let mut source = ScriptedSource::new(["fast"]);
        let categories = vec!["adjective".to_string(), "noun".to_string()];

        assert_eq!(collect_words(&mut source, &categories).unwrap(), None);
    }

    #[test]
    fn affirmative_answers() {
        for answer in ["yes", "Y", "yep", "y", "YES", "  yes  "] {
            assert!(is_affirmative(answer), "'{}' should be affirmative", answer);
        }
    }

    #[test]
    fn negative_answers() {
        for answer in ["no", "", "nah", "n", "maybe", "ok", "   "] {
            assert!(!is_affirmative(answer), "'{}' should be negative", answer);
        }
    }

    #[test]
    fn confirm_parses_answer() {
        let mut source = ScriptedSource::new(["yes"]);
        assert!(confirm(&mut source, "Play again?").unwrap());

        let mut source = ScriptedSource::new(["nah"]);
        assert!(!confirm(&mut source, "Play again?").unwrap());
    }

    #[test]
    fn confirm_treats_eof_as_no() {
        let mut source = ScriptedSource::new(Vec::<String>::new());
        assert!(!confirm(&mut source, "Play again?").unwrap());
    }

    #[test]
    fn confirm_treats_empty_answer_as_no_without_retry() {
        let mut source = ScriptedSource::new(["", "yes"]);
        // The empty line is consumed as a "no"; no re-prompt happens.
        assert!(!confirm(&mut source, "Save?").unwrap());
    }
}
