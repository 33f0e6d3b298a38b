// src/filtering/extension.rs

use crate::core_types::FileInfo;

/// Checks a file against an optional extension allow-list.
///
/// The allow-list holds lowercase extensions without a leading dot. `None`
/// accepts every file; otherwise the file's lowercase extension must be in
/// the list, so files without an extension never pass a non-empty list.
///
/// # Examples
///
/// ```
/// use storage_tools::core_types::FileInfo;
/// use storage_tools::filtering::passes_extension_filter;
/// use std::path::PathBuf;
///
/// let file = FileInfo {
///     path: PathBuf::from("/photos/IMG_0001.JPG"),
///     size: 1,
///     modified: 0.0,
///     is_symlink: false,
/// };
/// let allowed = vec!["jpg".to_string(), "png".to_string()];
///
/// assert!(passes_extension_filter(&file, Some(allowed.as_slice())));
/// assert!(passes_extension_filter(&file, None));
/// ```
pub fn passes_extension_filter(file: &FileInfo, allowed: Option<&[String]>) -> bool {
    match allowed {
        Some(exts) => {
            let ext = file.extension();
            !ext.is_empty() && exts.iter().any(|allowed_ext| *allowed_ext == ext)
        }
        None => true,
    }
}
