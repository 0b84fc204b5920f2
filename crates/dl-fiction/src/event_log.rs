//! Chronological history of the locations the player acted in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dl_core::LocationId;

/// One completed turn: where it started and what was chosen there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Location the turn started in.
    pub location: LocationId,
    /// Long description of that location.
    pub description: String,
    /// Command chosen there.
    pub command: String,
    /// When the command was accepted.
    pub timestamp: DateTime<Utc>,
}

/// Append-only turn history with single-step removal for undo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a turn.
    pub fn append(&mut self, location: LocationId, description: &str, command: &str) {
        self.entries.push(LogEntry {
            location,
            description: description.to_string(),
            command: command.to_string(),
            timestamp: Utc::now(),
        });
    }

    /// Drop and return the most recent entry.
    pub fn remove_last(&mut self) -> Option<LogEntry> {
        self.entries.pop()
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Get all entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the log as plain text, one turn per line.
    pub fn export_text(&self) -> String {
        if self.entries.is_empty() {
            return "Nothing has happened yet.".to_string();
        }
        let mut out = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}. location {} -> {}\n",
                i + 1,
                entry.location,
                entry.command
            ));
        }
        out
    }
}
