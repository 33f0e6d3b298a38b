//! Large-file search: the N largest files in a tree, optionally per group.

use crate::cancellation::{check_optional, CancellationToken};
use crate::config::{normalize_path, GroupBy, SearchOptions};
use crate::core_types::FileInfo;
use crate::discovery::walk_directory;
use crate::errors::Result;
use crate::filtering::{passes_extension_filter, passes_modified_filter, passes_size_filter};
use crate::ranking::TopNTracker;
use log::debug;
use std::collections::HashMap;
use std::path::Path;
use tracing::instrument;

/// Group key for files without an extension in extension-grouped results.
pub const NO_EXTENSION_KEY: &str = "(no extension)";
/// The single group key used when no grouping is requested.
pub const ALL_FILES_KEY: &str = "all";

/// Finds the largest files under a directory.
///
/// A file is considered only if it passes every configured filter: the
/// minimum size, the extension allow-list and the modified-since cutoff.
#[derive(Debug, Clone, Default)]
pub struct LargeFileFinder {
    options: SearchOptions,
    token: Option<CancellationToken>,
}

impl LargeFileFinder {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            token: None,
        }
    }

    /// Makes the search stop with `Error::Interrupted` once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Returns up to `top_n` matching files, size-descending.
    ///
    /// # Errors
    /// [`InvalidArgument`](crate::Error::InvalidArgument) when `top_n` is
    /// zero, [`NotFound`](crate::Error::NotFound) or
    /// [`NotADirectory`](crate::Error::NotADirectory) for a bad root,
    /// [`Interrupted`](crate::Error::Interrupted) on cancellation.
    #[instrument(level = "debug", skip_all)]
    pub fn find<P: AsRef<Path>>(&self, path: P) -> Result<Vec<FileInfo>> {
        let root = normalize_path(path);
        let mut tracker = TopNTracker::new(self.options.top_n)?;

        for file in walk_directory(&root, &self.options.traversal)? {
            self.check_cancelled()?;
            if self.admits(&file) {
                tracker.add(file);
            }
        }

        debug!("Found {} large file(s) under '{}'", tracker.len(), root.display());
        Ok(tracker.into_top_n())
    }

    /// Returns up to `top_n` matching files per group, each size-descending.
    ///
    /// Keys are the parent directory's full path for [`GroupBy::Directory`],
    /// the lowercase extension (or [`NO_EXTENSION_KEY`]) for
    /// [`GroupBy::Extension`], and [`ALL_FILES_KEY`] otherwise. Groups with no
    /// matching files do not appear.
    #[instrument(level = "debug", skip_all)]
    pub fn find_grouped<P: AsRef<Path>>(&self, path: P) -> Result<HashMap<String, Vec<FileInfo>>> {
        let root = normalize_path(path);
        // Validates the capacity before any I/O; groups clone it lazily.
        let template = TopNTracker::new(self.options.top_n)?;
        let mut groups: HashMap<String, TopNTracker> = HashMap::new();

        for file in walk_directory(&root, &self.options.traversal)? {
            self.check_cancelled()?;
            if !self.admits(&file) {
                continue;
            }
            groups
                .entry(group_key(&file, self.options.group_by))
                .or_insert_with(|| template.clone())
                .add(file);
        }

        debug!(
            "Grouped search of '{}' produced {} group(s)",
            root.display(),
            groups.len()
        );
        Ok(groups
            .into_iter()
            .map(|(key, tracker)| (key, tracker.into_top_n()))
            .collect())
    }

    fn admits(&self, file: &FileInfo) -> bool {
        passes_size_filter(file, self.options.min_size)
            && passes_extension_filter(file, self.options.extensions.as_deref())
            && passes_modified_filter(file, self.options.modified_since)
    }

    fn check_cancelled(&self) -> Result<()> {
        check_optional(self.token.as_ref())
    }
}

fn group_key(file: &FileInfo, group_by: GroupBy) -> String {
    match group_by {
        GroupBy::Directory => file.parent().display().to_string(),
        GroupBy::Extension => {
            let ext = file.extension();
            if ext.is_empty() {
                NO_EXTENSION_KEY.to_string()
            } else {
                ext
            }
        }
        GroupBy::None => ALL_FILES_KEY.to_string(),
    }
}
