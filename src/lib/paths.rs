//! Shared helpers reused across modules (e.g., path validation).

use std::{
    env,
    path::{Path, PathBuf},
};

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Strip trailing whitespace left over from shell quoting or file associations.
pub fn trim_trailing(raw: &str) -> &str {
    raw.trim_end()
}

/// Make `path` absolute against the current directory; falls back to the input when
/// the current directory is unavailable.
pub fn to_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}
