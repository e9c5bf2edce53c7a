//! Error types for loading, parsing and saving history files
//!
//! Per-line problems are not errors at this level: they surface as
//! [`LineWarning`](crate::parsers::LineWarning) records and the load continues.
//! Everything in [`HistoryError`] is fatal for the operation that raised it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A single line does not match `: <timestamp>:<elapsed>;<command>`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse '{line}' as a history entry")]
pub struct EntryParseError {
    pub line: String,
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to read history file '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("History path '{}' is not a regular file", .path.display())]
    NotAFile { path: PathBuf },

    #[error("Failed to back up '{}' to '{}': {source}", .path.display(), .backup.display())]
    Backup {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write history to '{}': {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not determine the home directory")]
    HomeNotFound,
}

pub type Result<T> = std::result::Result<T, HistoryError>;
