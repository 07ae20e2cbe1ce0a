//! Session event log.
//!
//! Appends one JSON object per line (NDJSON) to `events.ndjson` in the story
//! directory, recording rounds played and stories saved. Each event carries:
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: `round_played` or `story_saved`
//! - `actor`: `USER@HOSTNAME`
//! - `details`: freeform object with action-specific details
//!
//! Appends are best-effort from the caller's point of view: the session
//! loop logs a warning on failure and keeps playing.

use crate::error::{MadlibError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A round was played to completion and the story displayed.
    RoundPlayed,
    /// A completed story was saved to disk.
    StorySaved,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::RoundPlayed => write!(f, "round_played"),
            EventAction::StorySaved => write!(f, "story_saved"),
        }
    }
}

/// An event record for the session log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// Who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action, stamped with the current
    /// time and the local actor string.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor_string(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| MadlibError::Storage(format!("failed to serialize event to JSON: {}", e)))
    }
}

/// Actor string for event metadata: `USER@HOSTNAME`.
fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Path of the events file inside a story directory.
pub fn events_file_path(story_dir: &Path) -> PathBuf {
    story_dir.join("events.ndjson")
}

/// Append an event to the log in the given story directory.
///
/// Creates the directory and the file on first use. Each append writes one
/// JSON line with a trailing newline and syncs it to disk.
pub fn append_event(story_dir: &Path, event: &Event) -> Result<()> {
    let json_line = event.to_ndjson_line()?;

    std::fs::create_dir_all(story_dir).map_err(|e| {
        MadlibError::Storage(format!(
            "failed to create story directory '{}': {}",
            story_dir.display(),
            e
        ))
    })?;

    let events_file = events_file_path(story_dir);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            MadlibError::Storage(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        MadlibError::Storage(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    file.sync_all().map_err(|e| {
        MadlibError::Storage(format!(
            "failed to sync events file '{}': {}",
            events_file.display(),
            e
        ))
    })
}
