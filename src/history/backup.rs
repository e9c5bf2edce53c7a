//! Timestamped backups of a history file before it is overwritten

use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};

use crate::errors::{HistoryError, Result};

/// Backup location for `path` at `timestamp`: `{path}.{timestamp}`
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use zsh_history_cleaner::history::backup_path_for;
///
/// let backup = backup_path_for(Path::new("/home/alice/.zsh_history"), 1700000000);
/// assert_eq!(backup, PathBuf::from("/home/alice/.zsh_history.1700000000"));
/// ```
pub fn backup_path_for(path: &Path, timestamp: i64) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{}", timestamp));
    PathBuf::from(name)
}

/// Copy the on-disk file at `path` to `{path}.{now}` and return the backup path
///
/// The copy is byte-for-byte. Permissions follow `fs::copy`; the modification
/// time is carried over when the platform supports it. An existing file at the
/// backup path is never overwritten.
pub fn create_backup(path: &Path) -> Result<PathBuf> {
    let backup = backup_path_for(path, Utc::now().timestamp());
    info!("Backing up '{}' to '{}'", path.display(), backup.display());

    copy_without_overwrite(path, &backup).map_err(|source| HistoryError::Backup {
        path: path.to_path_buf(),
        backup: backup.clone(),
        source,
    })?;

    if let Err(e) = preserve_modified_time(path, &backup) {
        debug!("Could not preserve modification time on '{}': {}", backup.display(), e);
    }

    Ok(backup)
}

fn copy_without_overwrite(src: &Path, dst: &Path) -> io::Result<()> {
    if dst.try_exists()? {
        return Err(io::Error::new(io::ErrorKind::AlreadyExists, "backup file already exists"));
    }
    fs::copy(src, dst)?;
    Ok(())
}

fn preserve_modified_time(src: &Path, dst: &Path) -> io::Result<()> {
    let modified = fs::metadata(src)?.modified()?;
    File::options().write(true).open(dst)?.set_modified(modified)
}
