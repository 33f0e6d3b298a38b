// src/discovery/entry_processor.rs

use crate::config::TraversalConfig;
use crate::core_types::FileInfo;
use crate::filtering::should_exclude;
use log::{debug, trace};
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use walkdir::DirEntry;

/// What the walker does with one directory entry.
#[derive(Debug)]
pub(super) enum EntryAction {
    /// A regular file that passed every check.
    Yield(FileInfo),
    /// Not a file, or filtered out; keep walking.
    Skip,
    /// A directory that must not be descended into.
    Prune,
}

/// Processes a single entry from the walk.
///
/// Applies the path policy, then the symlink policy, then stats regular
/// files. Failures at any step skip only this entry.
pub(super) fn process_entry(entry: &DirEntry, config: &TraversalConfig) -> EntryAction {
    let path = entry.path();
    let is_dir = entry.file_type().is_dir();
    trace!("Processing entry: {}", path.display());

    // --- 1. Path policy ---
    if should_exclude(path, &config.exclude_patterns, config.include_hidden) {
        trace!("Excluded by path policy: {}", path.display());
        return if is_dir {
            EntryAction::Prune
        } else {
            EntryAction::Skip
        };
    }

    // --- 2. Symlink policy ---
    let is_symlink = entry.path_is_symlink();
    if is_symlink {
        if !config.follow_symlinks {
            trace!("Skipping symlink (not following): {}", path.display());
            return EntryAction::Skip;
        }
        if resolve_link(path).is_none() {
            return if is_dir {
                EntryAction::Prune
            } else {
                EntryAction::Skip
            };
        }
    }

    // --- 3. Regular files only ---
    if !entry.file_type().is_file() {
        return EntryAction::Skip;
    }

    let Some(metadata) = stat_entry(entry) else {
        return EntryAction::Skip;
    };
    match FileInfo::from_metadata(path.to_path_buf(), &metadata, is_symlink) {
        Ok(file_info) => EntryAction::Yield(file_info),
        Err(e) => {
            debug!("Skipping '{}': no modification time: {}", path.display(), e);
            EntryAction::Skip
        }
    }
}

/// Reads an entry's metadata, or `None` if the stat call fails.
pub(super) fn stat_entry(entry: &DirEntry) -> Option<Metadata> {
    match entry.metadata() {
        Ok(metadata) => Some(metadata),
        Err(e) => {
            debug!("Skipping '{}': failed to read metadata: {}", entry.path().display(), e);
            None
        }
    }
}

/// Resolves a symlink to its final target, or `None` for broken or circular links.
pub(super) fn resolve_link(path: &Path) -> Option<PathBuf> {
    match path.canonicalize() {
        Ok(target) => Some(target),
        Err(e) => {
            debug!("Skipping unresolvable symlink '{}': {}", path.display(), e);
            None
        }
    }
}
