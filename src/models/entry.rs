use chrono::{DateTime, Utc};

/// One command record from a Zsh extended history file
///
/// Entries are immutable once built. Two entries are duplicates when their
/// `command` strings are equal, whatever their timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    raw_line: String,
    beginning_time: u64,
    elapsed_seconds: u8,
    command: String,
}

impl HistoryEntry {
    pub fn new(
        raw_line: impl Into<String>,
        beginning_time: u64,
        elapsed_seconds: u8,
        command: impl Into<String>,
    ) -> Self {
        Self {
            raw_line: raw_line.into(),
            beginning_time,
            elapsed_seconds,
            command: command.into(),
        }
    }

    /// The line exactly as read, without its final `\n`. A multi-line command keeps its
    /// embedded newlines. Written back verbatim on save.
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Unix timestamp (seconds) at which the command started
    pub fn beginning_time(&self) -> u64 {
        self.beginning_time
    }

    pub fn elapsed_seconds(&self) -> u8 {
        self.elapsed_seconds
    }

    /// The command text, trimmed. This is the deduplication key.
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn is_duplicate_of(&self, other: &HistoryEntry) -> bool {
        self.command == other.command
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.beginning_time).ok().and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

/// Which occurrence of a repeated command survives deduplication
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DedupeStrategy {
    /// Keep the first occurrence, in order of first appearance
    #[default]
    First,
    /// Keep the last occurrence, in order of last appearance
    Last,
}
