use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::backup::create_backup;
use crate::errors::{HistoryError, Result};
use crate::models::{DedupeStrategy, HistoryEntry};
use crate::parsers::{HistoryLines, LineWarning, ParsedLine, WarningKind, parse_line};

/// Entry counts around a deduplication pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupeReport {
    pub before: usize,
    pub after: usize,
}

impl DedupeReport {
    pub fn removed(&self) -> usize {
        self.before - self.after
    }
}

/// The entries of one history file, in file order
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
    warnings: Vec<LineWarning>,
}

impl HistoryStore {
    /// Load and parse the history file at `path`
    ///
    /// Malformed or undecodable lines are logged, recorded in [`warnings`](Self::warnings)
    /// and dropped. Blank lines are dropped silently.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or read ([`HistoryError::Load`])
    /// - The path is a directory or other non-regular file ([`HistoryError::NotAFile`])
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let load_error = |source: io::Error| HistoryError::Load { path: path.clone(), source };

        let file = File::open(&path).map_err(load_error)?;
        let metadata = file.metadata().map_err(load_error)?;
        if !metadata.is_file() {
            return Err(HistoryError::NotAFile { path: path.clone() });
        }

        let (entries, warnings) = read_entries(BufReader::new(file)).map_err(load_error)?;
        info!("{} history entries read from {}", entries.len(), path.display());

        Ok(Self { path, entries, warnings })
    }

    /// Build a store from already parsed entries, as if loaded from `path`
    pub fn from_entries(path: impl Into<PathBuf>, entries: Vec<HistoryEntry>) -> Self {
        Self { path: path.into(), entries, warnings: Vec::new() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Lines skipped during the load, in file order
    pub fn warnings(&self) -> &[LineWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries a deduplication would remove
    pub fn duplicate_count(&self) -> usize {
        let distinct: HashSet<&str> = self.entries.iter().map(HistoryEntry::command).collect();
        self.entries.len() - distinct.len()
    }

    /// Remove duplicate commands, keeping the first occurrence of each
    ///
    /// Given commands `[A, B, A, C, B]` the store ends up with `[A, B, C]`.
    pub fn remove_duplicates(&mut self) -> DedupeReport {
        self.remove_duplicates_with(DedupeStrategy::First)
    }

    /// Remove duplicate commands, keeping one occurrence per `strategy`
    ///
    /// Surviving entries keep their relative file order.
    pub fn remove_duplicates_with(&mut self, strategy: DedupeStrategy) -> DedupeReport {
        let before = self.entries.len();

        let mut keep = retain_mask(&self.entries, strategy).into_iter();
        self.entries.retain(|_| keep.next().unwrap_or(false));

        let report = DedupeReport { before, after: self.entries.len() };
        debug!(
            "Removed {} duplicate entries ({} -> {}) keeping {:?} occurrences",
            report.removed(),
            report.before,
            report.after,
            strategy
        );
        report
    }

    /// Write the entries to `output` (the loaded path when `None`)
    ///
    /// When `backup` is true the current on-disk file at [`path`](Self::path) is first
    /// copied to `{path}.{unix_timestamp}`; if that fails nothing is written.
    /// The write truncates and rewrites the target in place, so a crash mid-write
    /// can leave it partially written.
    ///
    /// Returns the backup path when a backup was made.
    pub fn save(&self, output: Option<&Path>, backup: bool) -> Result<Option<PathBuf>> {
        let output = output.unwrap_or(&self.path);

        let backup_path = if backup { Some(create_backup(&self.path)?) } else { None };

        write_entries(output, &self.entries)
            .map_err(|source| HistoryError::Save { path: output.to_path_buf(), source })?;
        info!("History successfully written to {} ({} entries)", output.display(), self.len());

        Ok(backup_path)
    }
}

/// Parse every line from `reader`, collecting entries and per-line warnings
///
/// Only read errors from `reader` itself are returned as `Err`.
pub fn read_entries<R: BufRead>(reader: R) -> io::Result<(Vec<HistoryEntry>, Vec<LineWarning>)> {
    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for line in HistoryLines::new(reader) {
        let (line_number, bytes) = line?;
        match parse_line(line_number, &bytes) {
            ParsedLine::Entry(entry) => entries.push(entry),
            ParsedLine::Blank => {}
            ParsedLine::Skipped(warning) => {
                match warning.kind {
                    WarningKind::Parse => {
                        warn!("Impossible to parse line {}: '{}'", warning.line_number, warning.raw)
                    }
                    WarningKind::Decode => warn!(
                        "Line {} is not valid UTF-8, skipping: '{}'",
                        warning.line_number, warning.raw
                    ),
                }
                warnings.push(warning);
            }
        }
    }

    Ok((entries, warnings))
}

// Entry order is never taken from the set, only from the slice.
fn retain_mask(entries: &[HistoryEntry], strategy: DedupeStrategy) -> Vec<bool> {
    let mut seen = HashSet::with_capacity(entries.len());
    match strategy {
        DedupeStrategy::First => entries.iter().map(|e| seen.insert(e.command())).collect(),
        DedupeStrategy::Last => {
            let mut mask: Vec<bool> =
                entries.iter().rev().map(|e| seen.insert(e.command())).collect();
            mask.reverse();
            mask
        }
    }
}

fn write_entries(path: &Path, entries: &[HistoryEntry]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for entry in entries {
        writer.write_all(entry.raw_line().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
