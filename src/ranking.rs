//! Bounded top-N selection of files by size.

use crate::core_types::FileInfo;
use crate::errors::{Error, Result};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A held file tagged with its arrival order.
#[derive(Debug, Clone)]
struct RankedEntry {
    size: u64,
    sequence: u64,
    file: FileInfo,
}

// Rank by size; among equal sizes an earlier arrival ranks higher. Under
// `Reverse` the heap top is therefore the smallest, latest-arrived entry,
// which is exactly the one a stable sort-and-truncate would drop first.
impl Ord for RankedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size
            .cmp(&other.size)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedEntry {}

/// Keeps the `capacity` largest files seen in a stream, in O(capacity) memory.
///
/// `add` is O(log capacity). A full tracker only admits a file strictly
/// larger than its current minimum, so among equal sizes the earliest
/// arrivals are the ones kept.
///
/// This is not a plain `(size, sequence)` min-heap. When a larger file
/// evicts one of several equally small entries, the latest arrival among
/// them goes, so the held set always equals a stable size-descending sort
/// truncated to `capacity`. Feeding `a(5)`, `b(5)`, `c(10)` into capacity 2
/// keeps `c` and `a`.
///
/// # Examples
///
/// ```
/// use storage_tools::core_types::FileInfo;
/// use storage_tools::ranking::TopNTracker;
/// use std::path::PathBuf;
///
/// # fn main() -> Result<(), storage_tools::Error> {
/// let file = |name: &str, size: u64| FileInfo {
///     path: PathBuf::from(name),
///     size,
///     modified: 0.0,
///     is_symlink: false,
/// };
///
/// let mut tracker = TopNTracker::new(2)?;
/// tracker.add(file("a", 10));
/// tracker.add(file("b", 30));
/// tracker.add(file("c", 20));
///
/// let sizes: Vec<u64> = tracker.get_top_n().iter().map(|f| f.size).collect();
/// assert_eq!(sizes, vec![30, 20]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TopNTracker {
    capacity: usize,
    heap: BinaryHeap<Reverse<RankedEntry>>,
    next_sequence: u64,
}

impl TopNTracker {
    /// Creates an empty tracker. A capacity of zero is an `InvalidArgument` error.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidArgument(
                "top-N capacity must be a positive integer".to_string(),
            ));
        }
        Ok(Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        })
    }

    /// Offers one file to the tracker.
    pub fn add(&mut self, file: FileInfo) {
        let entry = RankedEntry {
            size: file.size,
            sequence: self.next_sequence,
            file,
        };
        self.next_sequence += 1;

        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(entry));
            return;
        }

        if let Some(mut smallest) = self.heap.peek_mut() {
            if entry.size > smallest.0.size {
                *smallest = Reverse(entry);
            }
        }
    }

    /// Returns the held files, size-descending with earlier arrivals first on ties.
    /// Does not change the tracker.
    pub fn get_top_n(&self) -> Vec<FileInfo> {
        let mut entries: Vec<&RankedEntry> = self.heap.iter().map(|r| &r.0).collect();
        entries.sort_unstable_by(|a, b| b.cmp(a));
        entries.into_iter().map(|entry| entry.file.clone()).collect()
    }

    /// Consumes the tracker, returning the same ordering as [`get_top_n`](Self::get_top_n).
    pub fn into_top_n(self) -> Vec<FileInfo> {
        // Ascending in `Reverse` order is descending by rank.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(entry)| entry.file)
            .collect()
    }

    /// Number of files currently held (never more than the capacity).
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
