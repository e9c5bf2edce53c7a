//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const HISTORY_FILENAME: &str = ".zsh_history";

/// Builder for a temporary home directory holding a `.zsh_history` file
pub struct HistoryFileBuilder {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl HistoryFileBuilder {
    /// Create a new builder with an empty history
    pub fn new() -> Self {
        Self { lines: Vec::new(), trailing_newline: true }
    }

    /// Add a well-formed entry
    pub fn entry(mut self, timestamp: u64, elapsed: u8, command: &str) -> Self {
        self.lines.push(format!(": {}:{};{}", timestamp, elapsed, command));
        self
    }

    /// Add a line verbatim
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Add one entry per command with increasing timestamps
    pub fn commands(mut self, commands: &[&str]) -> Self {
        let start = 1_583_848_895 + self.lines.len() as u64;
        for (i, command) in commands.iter().enumerate() {
            self = self.entry(start + i as u64, 0, command);
        }
        self
    }

    pub fn without_trailing_newline(mut self) -> Self {
        self.trailing_newline = false;
        self
    }

    /// Content the file will be written with
    pub fn content(&self) -> String {
        let mut content = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            content.push('\n');
        }
        content
    }

    /// Write the history into a fresh temp home directory
    pub fn build(self) -> TestHome {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join(HISTORY_FILENAME), self.content())
            .expect("Failed to write history file");
        TestHome { temp_dir }
    }
}

impl Default for HistoryFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A temporary home directory with a history file in it
pub struct TestHome {
    temp_dir: TempDir,
}

impl TestHome {
    /// Home directory with no history file
    pub fn empty() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn history_path(&self) -> PathBuf {
        self.temp_dir.path().join(HISTORY_FILENAME)
    }

    pub fn read_history(&self) -> String {
        fs::read_to_string(self.history_path()).expect("Failed to read history file")
    }

    /// Backup files (`.zsh_history.<timestamp>`) present in the home directory
    pub fn backups(&self) -> Vec<PathBuf> {
        let prefix = format!("{}.", HISTORY_FILENAME);
        let mut backups: Vec<PathBuf> = fs::read_dir(self.temp_dir.path())
            .expect("Failed to list temp dir")
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .and_then(|name| name.strip_prefix(&prefix))
                    .is_some_and(|suffix| suffix.chars().all(|c| c.is_ascii_digit()))
            })
            .collect();
        backups.sort();
        backups
    }
}
