//! The `storage_tools` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use storage_tools::prelude::*;
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let root = tempfile::Builder::new().prefix("prelude-doc").tempdir()?;
//! std::fs::write(root.path().join("a.log"), "0123456789")?;
//!
//! let token = CancellationToken::new();
//! let finder = LargeFileFinder::new(SearchOptions::default()).with_cancellation(token);
//! let files = finder.find(root.path())?;
//! assert_eq!(files.len(), 1);
//! # Ok(())
//! # }
//! ```

pub use crate::analysis::FolderAnalyzer;
pub use crate::cancellation::CancellationToken;
pub use crate::config::{
    normalize_path, parse_date, parse_size, AnalysisOptions, Config, ExcludePattern, GroupBy,
    OutputConfig, OutputFormat, SearchOptions, SortBy, Task, TraversalConfig,
};
pub use crate::core_types::{ExtensionStats, FileInfo, StorageStats};
pub use crate::discovery::{walk_directory, DirectoryWalker};
pub use crate::errors::{Error, Result};
pub use crate::filtering::should_exclude;
pub use crate::output::{format_size, format_size_with_precision};
pub use crate::ranking::TopNTracker;
pub use crate::run;
pub use crate::search::LargeFileFinder;
