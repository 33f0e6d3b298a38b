// src/filtering/size.rs

use crate::core_types::FileInfo;

/// Checks that the file is at least `min_size` bytes.
#[inline]
pub fn passes_size_filter(file: &FileInfo, min_size: u64) -> bool {
    file.size >= min_size
}
