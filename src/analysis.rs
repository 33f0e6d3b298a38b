//! Folder analysis: aggregate statistics over one directory tree.

use crate::cancellation::{check_optional, CancellationToken};
use crate::config::{normalize_path, AnalysisOptions};
use crate::core_types::{FileInfo, StorageStats};
use crate::discovery::{check_root, count_child_directories, count_directories, walk_directory};
use crate::errors::Result;
use crate::ranking::TopNTracker;
use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Computes [`StorageStats`] for a directory tree.
///
/// # Examples
///
/// ```
/// use storage_tools::{AnalysisOptions, FolderAnalyzer};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let root = tempfile::Builder::new().prefix("analyze-doc").tempdir()?;
/// std::fs::write(root.path().join("a.txt"), vec![0u8; 100])?;
/// std::fs::create_dir(root.path().join("sub"))?;
/// std::fs::write(root.path().join("sub").join("b.log"), vec![0u8; 300])?;
///
/// let stats = FolderAnalyzer::new(AnalysisOptions::default()).analyze(root.path())?;
/// assert_eq!(stats.total_size, 400);
/// assert_eq!(stats.file_count, 2);
/// assert_eq!(stats.directory_count, 1);
/// assert_eq!(stats.deepest_level, 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FolderAnalyzer {
    options: AnalysisOptions,
    token: Option<CancellationToken>,
}

impl FolderAnalyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self {
            options,
            token: None,
        }
    }

    /// Makes the analysis stop with `Error::Interrupted` once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyzes the tree under `path`.
    ///
    /// Runs one directory-count pass and one file walk. The largest files are
    /// kept in a bounded tracker, so memory does not grow with the tree.
    ///
    /// # Errors
    /// [`NotFound`](crate::Error::NotFound) or
    /// [`NotADirectory`](crate::Error::NotADirectory) for a bad root,
    /// [`Interrupted`](crate::Error::Interrupted) on cancellation.
    #[instrument(level = "debug", skip_all)]
    pub fn analyze<P: AsRef<Path>>(&self, path: P) -> Result<StorageStats> {
        let root = normalize_path(path);
        check_root(&root)?;
        debug!("Analyzing '{}'", root.display());

        let mut stats = StorageStats {
            directory_count: count_directories(&root, self.options.traversal.max_depth),
            ..Default::default()
        };
        let mut largest = match self.options.track_largest_n {
            0 => None,
            n => Some(TopNTracker::new(n)?),
        };

        for file in walk_directory(&root, &self.options.traversal)? {
            self.check_cancelled()?;
            record_file(&mut stats, &root, &file);
            if let Some(tracker) = largest.as_mut() {
                tracker.add(file);
            }
        }

        stats.largest_files = largest.map(TopNTracker::into_top_n).unwrap_or_default();
        debug!(
            "Analysis of '{}' complete: {} files, {} bytes, {} directories",
            root.display(),
            stats.file_count,
            stats.total_size,
            stats.directory_count
        );
        Ok(stats)
    }

    /// Breaks the tree under `path` down by the directory that directly holds each file.
    ///
    /// Each bucket carries `total_size`, `file_count` and `extension_stats` for
    /// the files directly inside that directory, and `directory_count` for its
    /// immediate subdirectories. Directories holding no counted files get no
    /// bucket. The per-bucket file counts add up to `analyze(path).file_count`.
    #[instrument(level = "debug", skip_all)]
    pub fn analyze_by_directory<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<BTreeMap<PathBuf, StorageStats>> {
        let root = normalize_path(path);
        let mut buckets: BTreeMap<PathBuf, StorageStats> = BTreeMap::new();

        for file in walk_directory(&root, &self.options.traversal)? {
            self.check_cancelled()?;
            buckets
                .entry(file.parent().to_path_buf())
                .or_default()
                .count_file(&file);
        }

        for (dir, stats) in buckets.iter_mut() {
            stats.directory_count = count_child_directories(dir);
        }

        debug!(
            "Per-directory analysis of '{}' produced {} buckets",
            root.display(),
            buckets.len()
        );
        Ok(buckets)
    }

    fn check_cancelled(&self) -> Result<()> {
        check_optional(self.token.as_ref())
    }
}

/// Folds one file into the running totals and extremes.
///
/// Deepest, oldest and newest are replaced only on a strict improvement, so
/// the first file seen wins ties.
fn record_file(stats: &mut StorageStats, root: &Path, file: &FileInfo) {
    stats.count_file(file);

    if let Ok(relative) = file.path.strip_prefix(root) {
        let depth = relative.components().count();
        if depth > stats.deepest_level {
            stats.deepest_level = depth;
            stats.deepest_path = Some(file.path.clone());
        }
    }

    if stats
        .oldest_file
        .as_ref()
        .map_or(true, |oldest| file.modified < oldest.modified)
    {
        stats.oldest_file = Some(file.clone());
    }
    if stats
        .newest_file
        .as_ref()
        .map_or(true, |newest| file.modified > newest.modified)
    {
        stats.newest_file = Some(file.clone());
    }
}
