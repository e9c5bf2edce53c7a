//! Zsh History Cleaner - Remove duplicate commands from a Zsh history file
//!
//! This library reads a Zsh extended history file (`: <timestamp>:<elapsed>;<command>`
//! lines), removes repeated commands while keeping chronological order, and writes the
//! result back, optionally after a timestamped backup of the original file. It supports:
//!
//! - Parsing history lines, skipping malformed or non-UTF-8 lines with a warning
//! - Order-preserving deduplication keyed on the command text
//! - Backup-then-overwrite persistence
//! - History statistics (most used commands, duplicate ratio, date range)
//!
//! # Example
//!
//! ```no_run
//! use zsh_history_cleaner::{HistoryStore, expand_tilde};
//! use std::path::Path;
//!
//! let mut history = HistoryStore::load(expand_tilde(Path::new("~/.zsh_history"))?)?;
//! let report = history.remove_duplicates();
//! println!("Removed {} duplicate commands", report.removed());
//! history.save(None, true)?;
//! # Ok::<(), zsh_history_cleaner::errors::HistoryError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod errors;
pub mod history;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use analysis::{HistoryAnalysis, analyze};
pub use errors::{EntryParseError, HistoryError};
pub use history::{DedupeReport, HistoryStore};
pub use models::{DedupeStrategy, HistoryEntry};
pub use parsers::{LineWarning, WarningKind, parse_entry};
pub use utils::paths::{expand_tilde, format_path_with_tilde};
