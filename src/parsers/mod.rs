//! Parsers for Zsh extended history files
//!
//! # Error Handling Strategy
//!
//! Parsing follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Individual line failures**: Lines that do not match the entry format, or that
//!   are not valid UTF-8, are reported as [`LineWarning`]s and skipped. One bad line
//!   never aborts a load.
//!
//! - **Blank lines**: Empty or whitespace-only lines are skipped silently.
//!
//! - **File-level failures**: Only I/O errors on the file itself are fatal; those are
//!   raised by [`HistoryStore::load`](crate::history::HistoryStore::load).

pub mod entry;
pub mod lines;

pub use entry::{LineWarning, ParsedLine, WarningKind, parse_entry, parse_line};
pub use lines::HistoryLines;
