// src/discovery/walker.rs

use super::entry_processor::{process_entry, EntryAction};
use crate::config::TraversalConfig;
use crate::core_types::FileInfo;
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// A lazy, depth-first stream of the regular files under a root directory.
///
/// Created by [`walk_directory`](super::walk_directory). Each call to `next`
/// does only as much directory reading as is needed to find the next file.
/// Unreadable directories, broken links and symlink loops are logged and
/// skipped. Dropping the walker closes any directory handles it holds.
pub struct DirectoryWalker<'a> {
    inner: walkdir::IntoIter,
    config: &'a TraversalConfig,
}

impl<'a> DirectoryWalker<'a> {
    pub(super) fn new(root: &Path, config: &'a TraversalConfig) -> Self {
        let mut walk = WalkDir::new(root)
            .min_depth(1)
            .follow_links(config.follow_symlinks);
        // walkdir counts a file directly in the root as depth 1, so allowing
        // `d` descents means a walkdir depth of `d + 1`.
        if let Some(depth) = config.max_depth {
            walk = walk.max_depth(depth.saturating_add(1));
        }
        debug!(
            "Configured walker for '{}': follow_symlinks={}, include_hidden={}, max_depth={:?}, {} exclude pattern(s)",
            root.display(),
            config.follow_symlinks,
            config.include_hidden,
            config.max_depth,
            config.exclude_patterns.len()
        );
        Self {
            inner: walk.into_iter(),
            config,
        }
    }
}

impl Iterator for DirectoryWalker<'_> {
    type Item = FileInfo;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    // Permission denied, vanished entries, broken links, loops.
                    debug!("Walker error (skipped): {}", err);
                    continue;
                }
            };

            match process_entry(&entry, self.config) {
                EntryAction::Yield(file_info) => return Some(file_info),
                EntryAction::Skip => {}
                EntryAction::Prune => self.inner.skip_current_dir(),
            }
        }
    }
}
