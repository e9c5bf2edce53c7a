use std::path::PathBuf;

use super::paths::home_dir;
use crate::errors::Result;

/// Get the default Zsh history path (~/.zsh_history)
pub fn default_history_path() -> Result<PathBuf> {
    Ok(home_dir()?.join(".zsh_history"))
}
