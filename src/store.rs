//! Story persistence.
//!
//! Completed stories are saved as sequentially numbered plain-text files
//! (`story_1.txt`, `story_2.txt`, ...) in a story directory, created on
//! first save. The next number is one past the highest existing story
//! number, so deleting a middle file never causes a name to be reused.

use crate::error::{MadlibError, Result};
use crate::fs::atomic_write_file;
use chrono::{DateTime, Local};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Default story directory, relative to the working directory.
pub const DEFAULT_STORY_DIR: &str = "mad_libs_stories";

/// Pattern for saved story filenames.
static STORY_FILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^story_(\d+)\.txt$").expect("Invalid story filename regex"));

/// A saved story on disk.
#[derive(Debug, Clone)]
pub struct StoryEntry {
    /// The sequential story number.
    pub number: u32,

    /// Full path to the story file.
    pub path: PathBuf,

    /// Last-modified time, if the filesystem reports one.
    pub modified: Option<DateTime<Local>>,
}

/// Handle on the story directory.
#[derive(Debug, Clone)]
pub struct StoryStore {
    dir: PathBuf,
}

impl StoryStore {
    /// Create a store for the given directory. The directory is not created
    /// until the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        StoryStore { dir: dir.into() }
    }

    /// The story directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save a completed story to the next numbered file.
    ///
    /// Creates the story directory if absent. Returns the path written.
    pub fn save(&self, story: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            MadlibError::Storage(format!(
                "failed to create story directory '{}': {}",
                self.dir.display(),
                e
            ))
        })?;

        let number = self.next_number()?;
        let path = self.dir.join(format!("story_{}.txt", number));
        atomic_write_file(&path, story)?;

        log::debug!("saved story #{} to {}", number, path.display());
        Ok(path)
    }

    /// List saved stories, ordered by number.
    ///
    /// A missing directory is an empty list, not an error.
    pub fn list(&self) -> Result<Vec<StoryEntry>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| {
            MadlibError::Storage(format!(
                "failed to read story directory '{}': {}",
                self.dir.display(),
                e
            ))
        })?;

        let mut stories = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                MadlibError::Storage(format!("failed to read directory entry: {}", e))
            })?;

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            let Some(caps) = STORY_FILE_REGEX.captures(name) else {
                continue;
            };
            let Ok(number) = caps[1].parse::<u32>() else {
                continue;
            };

            let modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .ok()
                .map(DateTime::<Local>::from);

            stories.push(StoryEntry {
                number,
                path: entry.path(),
                modified,
            });
        }

        stories.sort_by_key(|s| s.number);
        Ok(stories)
    }

    /// Load a saved story by number.
    pub fn load(&self, number: u32) -> Result<String> {
        let path = self.dir.join(format!("story_{}.txt", number));

        fs::read_to_string(&path).map_err(|e| {
            MadlibError::UserError(format!(
                "story {} not found in '{}': {}\n\n\
                 Use `madlib stories` to see saved stories.",
                number,
                self.dir.display(),
                e
            ))
        })
    }

    /// Highest existing story number plus one.
    fn next_number(&self) -> Result<u32> {
        let max = self.list()?.iter().map(|s| s.number).max().unwrap_or(0);
        Ok(max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> StoryStore {
        StoryStore::new(dir.path().join("stories"))
    }

    #[test]
    fn first_save_creates_directory_and_story_1() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let path = store.save("A fast car.").unwrap();

        assert_eq!(path.file_name().unwrap(), "story_1.txt");
        assert_eq!(fs::read_to_string(&path).unwrap(), "A fast car.");
    }

    #[test]
    fn sequential_saves_number_sequentially() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let first = store.save("first story").unwrap();
        let second = store.save("second story").unwrap();

        assert_eq!(first.file_name().unwrap(), "story_1.txt");
        assert_eq!(second.file_name().unwrap(), "story_2.txt");
        assert_eq!(fs::read_to_string(&first).unwrap(), "first story");
        assert_eq!(fs::read_to_string(&second).unwrap(), "second story");
    }

    #[test]
    fn deleted_middle_file_does_not_cause_reuse() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.save("one").unwrap();
        let second = store.save("two").unwrap();
        store.save("three").unwrap();

        fs::remove_file(&second).unwrap();

        let fourth = store.save("four").unwrap();
        assert_eq!(fourth.file_name().unwrap(), "story_4.txt");
    }

    #[test]
    fn next_number_skips_gaps() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.dir().join("story_1.txt"), "one").unwrap();
        fs::write(store.dir().join("story_5.txt"), "five").unwrap();

        let path = store.save("six").unwrap();
        assert_eq!(path.file_name().unwrap(), "story_6.txt");
    }

    #[test]
    fn list_ignores_unrelated_files() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.dir().join("story_2.txt"), "two").unwrap();
        fs::write(store.dir().join("notes.txt"), "not a story").unwrap();
        fs::write(store.dir().join("story_x.txt"), "bad number").unwrap();
        fs::write(store.dir().join("events.ndjson"), "{}").unwrap();

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].number, 2);
    }

    #[test]
    fn list_is_sorted_by_number() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(store.dir()).unwrap();
        for n in [3u32, 1, 10, 2] {
            fs::write(store.dir().join(format!("story_{}.txt", n)), "x").unwrap();
        }

        let numbers: Vec<u32> = store.list().unwrap().iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 10]);
    }

    #[test]
    fn list_of_missing_directory_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn load_returns_story_content() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.save("the story text").unwrap();

        assert_eq!(store.load(1).unwrap(), "the story text");
    }

    #[test]
    fn load_missing_story_is_a_user_error() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let err = store.load(42).unwrap_err();
        assert!(matches!(err, MadlibError::UserError(_)));
        assert!(err.to_string().contains("story 42 not found"));
    }
}
