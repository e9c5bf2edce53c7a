//! Statistics over a loaded history: size, duplicates, date range and most used commands

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::history::HistoryStore;
use crate::models::HistoryEntry;
use crate::utils::format_path_with_tilde;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandCount {
    pub command: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryAnalysis {
    pub path: String,
    pub total_entries: usize,
    pub duplicate_count: usize,
    pub skipped_lines: usize,
    pub first_entry: Option<DateTime<Utc>>,
    pub last_entry: Option<DateTime<Utc>>,
    pub top_commands: Vec<CommandCount>,
    /// Counted on the first word of each command
    pub top_executables: Vec<CommandCount>,
}

/// Analyze `store`, keeping the `top_n` most frequent commands and executables
///
/// Counts are sorted descending, ties broken alphabetically. `top_n == 0` yields
/// empty top lists.
pub fn analyze(store: &HistoryStore, top_n: usize) -> HistoryAnalysis {
    let entries = store.entries();

    let dates = entries.iter().filter_map(HistoryEntry::started_at);
    let (first_entry, last_entry) =
        dates.fold((None::<DateTime<Utc>>, None::<DateTime<Utc>>), |(min, max), date| {
            (Some(min.map_or(date, |m| m.min(date))), Some(max.map_or(date, |m| m.max(date))))
        });

    HistoryAnalysis {
        path: format_path_with_tilde(store.path()),
        total_entries: entries.len(),
        duplicate_count: store.duplicate_count(),
        skipped_lines: store.warnings().len(),
        first_entry,
        last_entry,
        top_commands: top_counts(entries.iter().map(HistoryEntry::command), top_n),
        top_executables: top_counts(
            entries.iter().filter_map(|e| e.command().split_whitespace().next()),
            top_n,
        ),
    }
}

fn top_counts<'a>(items: impl Iterator<Item = &'a str>, n: usize) -> Vec<CommandCount> {
    if n == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }

    let mut sorted: Vec<(&str, usize)> = counts.into_iter().collect();
    sorted.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    sorted.truncate(n);

    sorted
        .into_iter()
        .map(|(command, count)| CommandCount { command: command.to_string(), count })
        .collect()
}

impl Display for HistoryAnalysis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Zsh History Statistics")?;
        writeln!(f, "======================")?;
        writeln!(f, "History file: {}", self.path)?;
        writeln!(f, "Total entries: {}", self.total_entries)?;
        let percentage = if self.total_entries > 0 {
            self.duplicate_count as f64 / self.total_entries as f64 * 100.0
        } else {
            0.0
        };
        writeln!(f, "Duplicate entries: {} ({:.2}%)", self.duplicate_count, percentage)?;
        if self.skipped_lines > 0 {
            writeln!(f, "Skipped lines: {}", self.skipped_lines)?;
        }
        if let (Some(first), Some(last)) = (self.first_entry, self.last_entry) {
            writeln!(f, "Oldest entry: {}", first.format("%Y-%m-%d %H:%M:%S"))?;
            writeln!(f, "Newest entry: {}", last.format("%Y-%m-%d %H:%M:%S"))?;
        }

        if !self.top_commands.is_empty() {
            writeln!(f)?;
            writeln!(f, "Top {} commands:", self.top_commands.len())?;
            for (rank, item) in self.top_commands.iter().enumerate() {
                writeln!(f, "  {:>3}. {} ({} times)", rank + 1, item.command, item.count)?;
            }
        }
        if !self.top_executables.is_empty() {
            writeln!(f)?;
            writeln!(f, "Top {} executables:", self.top_executables.len())?;
            for (rank, item) in self.top_executables.iter().enumerate() {
                writeln!(f, "  {:>3}. {} ({} times)", rank + 1, item.command, item.count)?;
            }
        }

        Ok(())
    }
}
