//! Data model for Zsh history files
//!
//! - [`HistoryEntry`] - one parsed `: <timestamp>:<elapsed>;<command>` line
//! - [`DedupeStrategy`] - which occurrence of a repeated command is kept

pub mod entry;

pub use entry::{DedupeStrategy, HistoryEntry};
