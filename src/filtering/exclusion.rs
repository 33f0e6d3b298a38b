// src/filtering/exclusion.rs

use crate::config::ExcludePattern;
use std::path::{Component, Path};

/// Returns `true` if any normal component of `path` starts with a `.`.
///
/// `.` and `..` components are ignored, so a hidden ancestor directory
/// hides everything beneath it while a relative path like `./src` does not.
pub fn is_hidden_path(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

/// Decides whether a walk should skip `path`.
///
/// When `include_hidden` is false, a path with any hidden component is
/// excluded. Otherwise the path is excluded if any of `patterns` matches it
/// (see [`ExcludePattern::matches`]).
///
/// # Examples
///
/// ```
/// use storage_tools::config::ExcludePattern;
/// use storage_tools::filtering::should_exclude;
/// use std::path::Path;
///
/// let patterns = vec![ExcludePattern::glob("*.log").unwrap()];
///
/// assert!(should_exclude(Path::new("/srv/app/error.log"), &patterns, false));
/// assert!(should_exclude(Path::new("/srv/.cache/data.bin"), &[], false));
/// assert!(!should_exclude(Path::new("/srv/.cache/data.bin"), &[], true));
/// assert!(!should_exclude(Path::new("/srv/app/main.rs"), &patterns, false));
/// ```
pub fn should_exclude(path: &Path, patterns: &[ExcludePattern], include_hidden: bool) -> bool {
    if !include_hidden && is_hidden_path(path) {
        return true;
    }
    patterns.iter().any(|pattern| pattern.matches(path))
}
