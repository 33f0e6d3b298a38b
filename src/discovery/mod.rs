//! Discovers files under a root directory according to a `TraversalConfig`.

use crate::config::TraversalConfig;
use crate::errors::{io_error_with_path, Error, Result};
use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

mod entry_processor;
mod walker;

pub use walker::DirectoryWalker;

/// Starts a walk of the regular files under `root`.
///
/// The root is checked before anything is returned: a missing root fails
/// with [`Error::NotFound`] and a root that is not a directory fails with
/// [`Error::NotADirectory`]. After that the walk never fails; entries that
/// cannot be read are skipped.
///
/// Yielded paths are `root` joined with the entry's relative path, so an
/// absolute root gives absolute file paths.
///
/// # Examples
///
/// ```
/// use storage_tools::config::TraversalConfig;
/// use storage_tools::discovery::walk_directory;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let root = tempfile::Builder::new().prefix("walk-doc").tempdir()?;
/// std::fs::write(root.path().join("a.txt"), "hello")?;
/// std::fs::create_dir(root.path().join("sub"))?;
/// std::fs::write(root.path().join("sub").join("b.txt"), "hi")?;
///
/// let config = TraversalConfig {
///     max_depth: Some(0),
///     ..Default::default()
/// };
/// let files: Vec<_> = walk_directory(root.path(), &config)?.collect();
/// assert_eq!(files.len(), 1);
/// assert_eq!(files[0].size, 5);
/// # Ok(())
/// # }
/// ```
pub fn walk_directory<'a>(root: &Path, config: &'a TraversalConfig) -> Result<DirectoryWalker<'a>> {
    check_root(root)?;
    Ok(DirectoryWalker::new(root, config))
}

/// Verifies that `root` exists and is a directory.
pub(crate) fn check_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound(root.to_path_buf()),
        _ => io_error_with_path(e, root),
    })?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Counts the real (non-symlink) directories below `root`.
///
/// `max_depth` here is the number of directory levels counted: `Some(1)`
/// counts only the root's immediate subdirectories and `Some(0)` counts
/// nothing. Hidden and excluded directories are counted too. Unreadable
/// directories contribute nothing below themselves.
pub fn count_directories(root: &Path, max_depth: Option<usize>) -> u64 {
    // walkdir clamps max_depth up to min_depth, so zero levels is handled here.
    if max_depth == Some(0) {
        return 0;
    }
    let mut walk = WalkDir::new(root).min_depth(1).follow_links(false);
    if let Some(depth) = max_depth {
        walk = walk.max_depth(depth);
    }

    let count = walk
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("Directory count: skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .count() as u64;

    debug!("Counted {} directories under '{}'", count, root.display());
    count
}

/// Counts the immediate, non-symlink subdirectories of `dir` (0 if it cannot be read).
pub(crate) fn count_child_directories(dir: &Path) -> u64 {
    match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_ok_and(|ft| ft.is_dir()))
            .count() as u64,
        Err(e) => {
            debug!("Could not list '{}': {}", dir.display(), e);
            0
        }
    }
}
