//! In-memory history of one file: load, deduplicate, save
//!
//! A [`HistoryStore`] is built once from a file, transformed in place by
//! [`HistoryStore::remove_duplicates`], and written back by [`HistoryStore::save`],
//! optionally after a timestamped backup of the original file.

pub mod backup;
pub mod store;

pub use backup::{backup_path_for, create_backup};
pub use store::{DedupeReport, HistoryStore, read_entries};
