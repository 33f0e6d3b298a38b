// src/filtering/modified.rs

use crate::core_types::FileInfo;

/// Checks that the file was modified at or after `cutoff` (seconds since the epoch).
/// No cutoff accepts every file.
#[inline]
pub fn passes_modified_filter(file: &FileInfo, cutoff: Option<f64>) -> bool {
    cutoff.map_or(true, |since| file.modified >= since)
}
