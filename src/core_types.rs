//! Defines core data structures shared by the walker and its consumers.
//!
//! `FileInfo` is produced once per discovered file and never mutated
//! afterwards. `StorageStats` is the accumulator a `FolderAnalyzer` fills in
//! during a single analysis run.

use std::collections::HashMap;
use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// One regular file discovered during a walk.
///
/// # Examples
///
/// ```
/// use storage_tools::core_types::FileInfo;
/// use std::path::PathBuf;
///
/// let file_info = FileInfo {
///     path: PathBuf::from("/data/backups/archive.TAR.GZ"),
///     size: 2048,
///     modified: 1_700_000_000.5,
///     is_symlink: false,
/// };
///
/// assert_eq!(file_info.name(), "archive.TAR.GZ");
/// assert_eq!(file_info.extension(), "gz");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileInfo {
    /// Absolute path to the file, as discovered (symlinks are not resolved).
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Last-modified time in seconds since the Unix epoch, with sub-second precision.
    pub modified: f64,
    /// Whether the directory entry itself is a symbolic link.
    pub is_symlink: bool,
}

impl FileInfo {
    /// Builds a record from already-fetched metadata.
    ///
    /// # Errors
    /// Fails when the platform cannot report a modification time; the
    /// walker skips such entries rather than inventing a timestamp.
    pub fn from_metadata(
        path: PathBuf,
        metadata: &Metadata,
        is_symlink: bool,
    ) -> io::Result<Self> {
        Self::from_stat(path, metadata.len(), metadata.modified(), is_symlink)
    }

    fn from_stat(
        path: PathBuf,
        size: u64,
        modified: io::Result<SystemTime>,
        is_symlink: bool,
    ) -> io::Result<Self> {
        Ok(Self {
            path,
            size,
            modified: epoch_seconds(modified?),
            is_symlink,
        })
    }

    /// The base name of the file, lossily converted to UTF-8.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Lowercase extension without the leading dot, or an empty string.
    ///
    /// Only the suffix after the final dot counts, and dotfiles such as
    /// `.bashrc` have no extension.
    pub fn extension(&self) -> String {
        extension_of(&self.path)
    }

    /// The directory that directly contains this file.
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Lowercase extension of `path` without the leading dot.
pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Converts a `SystemTime` into fractional seconds relative to the Unix epoch.
/// Times before the epoch come out negative.
pub fn epoch_seconds(time: SystemTime) -> f64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_secs_f64(),
        Err(before) => -before.duration().as_secs_f64(),
    }
}

/// File count and byte total for one extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExtensionStats {
    pub count: u64,
    pub total_size: u64,
}

/// Aggregate statistics for one analysis run (or one directory bucket).
///
/// `total_size` always equals the sum of the sizes of the files counted in
/// `file_count`, and `largest_files` never holds more entries than the
/// configured track count.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StorageStats {
    pub total_size: u64,
    pub file_count: u64,
    pub directory_count: u64,
    /// Extension (lowercase, no dot) to count and size. Files without an
    /// extension are not classified.
    pub extension_stats: HashMap<String, ExtensionStats>,
    /// Largest files seen, size-descending.
    pub largest_files: Vec<FileInfo>,
    pub deepest_path: Option<PathBuf>,
    /// Path-component count of `deepest_path` relative to the analysis root
    /// (a file directly in the root has level 1).
    pub deepest_level: usize,
    pub oldest_file: Option<FileInfo>,
    pub newest_file: Option<FileInfo>,
}

impl StorageStats {
    /// Integer mean file size, or 0 when no files were counted.
    pub fn average_file_size(&self) -> u64 {
        if self.file_count == 0 {
            0
        } else {
            self.total_size / self.file_count
        }
    }

    /// Adds one file to the size, count and extension totals.
    pub(crate) fn count_file(&mut self, file: &FileInfo) {
        self.total_size += file.size;
        self.file_count += 1;

        let ext = file.extension();
        if !ext.is_empty() {
            let entry = self.extension_stats.entry(ext).or_default();
            entry.count += 1;
            entry.total_size += file.size;
        }
    }
}
