// src/config/path_resolve.rs

use std::path::{Path, PathBuf};

/// Resolves a user-supplied path to an absolute one.
///
/// A leading `~` is expanded to the home directory. Existing paths are
/// canonicalized (symlinks resolved); a path that cannot be canonicalized is
/// only made absolute, so that the walker can report it as missing.
///
/// # Examples
///
/// ```
/// use storage_tools::config::normalize_path;
///
/// let resolved = normalize_path("does/not/exist");
/// assert!(resolved.is_absolute());
/// assert!(resolved.ends_with("does/not/exist"));
/// ```
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let expanded = match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    };

    match expanded.canonicalize() {
        Ok(canonical) => canonical,
        Err(e) => {
            log::debug!(
                "Could not canonicalize '{}' ({}); using absolute path.",
                expanded.display(),
                e
            );
            std::path::absolute(&expanded).unwrap_or(expanded)
        }
    }
}
