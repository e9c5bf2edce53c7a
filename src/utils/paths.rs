use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

use crate::errors::{HistoryError, Result};

/// Resolve the invoking user's home directory
///
/// `HOME` wins when set and non-empty, otherwise the platform lookup from `dirs`.
pub fn home_dir() -> Result<PathBuf> {
    match env::var_os("HOME") {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
        _ => dirs::home_dir().ok_or(HistoryError::HomeNotFound),
    }
}

/// Expands a leading `~` to the home directory
///
/// Only `~` and `~/...` are expanded; `~user` forms and paths without a tilde
/// are returned unchanged.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use zsh_history_cleaner::expand_tilde;
///
/// // "/Users/alice/.zsh_history" if HOME=/Users/alice
/// let path = expand_tilde(Path::new("~/.zsh_history"))?;
/// # Ok::<(), zsh_history_cleaner::errors::HistoryError>(())
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    expand_tilde_with(path, home_dir)
}

/// Internal helper for tilde expansion with an injectable home lookup (for testing)
pub(crate) fn expand_tilde_with(
    path: &Path,
    home: impl FnOnce() -> Result<PathBuf>,
) -> Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(first) if first.as_os_str() == "~" => Ok(home()?.join(components.as_path())),
        _ => Ok(path.to_path_buf()),
    }
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use zsh_history_cleaner::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/.zsh_history");
/// // Returns "~/.zsh_history" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&Path>) -> String {
    let home_from_env = home_dir().ok();
    let home = home_override.or(home_from_env.as_deref());

    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        return Path::new("~").join(rest).to_string_lossy().into_owned();
    }

    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
