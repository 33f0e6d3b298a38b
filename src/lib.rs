//! `storage_tools` is a library and command-line tool for read-only disk
//! usage reporting over a local directory tree.
//!
//! It answers two questions without modifying anything on disk:
//! 1.  **Analyze**: how much space a tree uses, split by file type, with the
//!     largest, oldest, newest and most deeply nested files
//!     ([`FolderAnalyzer`]).
//! 2.  **Find large files**: which files are the biggest, optionally filtered
//!     by size, extension and modification date and grouped by directory or
//!     extension ([`LargeFileFinder`]).
//!
//! Both are consumers of the same lazy walker
//! ([`discovery::walk_directory`]), which applies the hidden-file, exclusion,
//! depth and symlink rules and quietly skips anything it cannot read. The
//! largest files are selected with a bounded [`TopNTracker`], so memory use
//! does not grow with the size of the tree.
//!
//! # Example: Library Usage
//!
//! ```
//! use storage_tools::{FolderAnalyzer, LargeFileFinder, AnalysisOptions, SearchOptions};
//! use std::fs;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let root = tempfile::Builder::new().prefix("storage-doc").tempdir()?;
//! fs::write(root.path().join("notes.txt"), vec![b'x'; 1200])?;
//! fs::create_dir(root.path().join("media"))?;
//! fs::write(root.path().join("media").join("clip.mp4"), vec![0u8; 5000])?;
//!
//! let stats = FolderAnalyzer::new(AnalysisOptions::default()).analyze(root.path())?;
//! assert_eq!(stats.file_count, 2);
//! assert_eq!(stats.total_size, 6200);
//! assert_eq!(stats.extension_stats["mp4"].total_size, 5000);
//!
//! let options = SearchOptions {
//!     top_n: 1,
//!     ..Default::default()
//! };
//! let largest = LargeFileFinder::new(options).find(root.path())?;
//! assert_eq!(largest[0].name(), "clip.mp4");
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod ranking;
pub mod search;
pub mod signal;

// Re-export key public types for easier use as a library
pub use analysis::FolderAnalyzer;
pub use cancellation::CancellationToken;
pub use config::{AnalysisOptions, Config, GroupBy, SearchOptions, SortBy, TraversalConfig};
pub use core_types::{ExtensionStats, FileInfo, StorageStats};
pub use errors::{Error, Result};
pub use ranking::TopNTracker;
pub use search::LargeFileFinder;

use crate::config::{normalize_path, OutputFormat, Task};
use std::io::Write;

/// Executes the task described by `config` and renders the report to `writer`.
///
/// Text reports are preceded by a short preamble naming the scanned
/// directory and active filters. The placeholder duplicate commands only
/// print a notice.
///
/// # Errors
/// Any error from the analysis or search itself, [`Error::Output`] if the
/// report cannot be written, and [`Error::Interrupted`] once `token` is
/// cancelled.
pub fn run(config: &Config, token: &CancellationToken, writer: &mut dyn Write) -> Result<()> {
    let text = config.output.format == OutputFormat::Text;

    match &config.task {
        Task::Analyze {
            path,
            options,
            by_directory,
        } => {
            let root = normalize_path(path);
            if text {
                output::write_analysis_preamble(writer, &root, options)?;
            }
            let analyzer = FolderAnalyzer::new(options.clone()).with_cancellation(token.clone());
            if *by_directory {
                let buckets = analyzer.analyze_by_directory(&root)?;
                output::render_directory_analysis(
                    writer,
                    &buckets,
                    &root,
                    options.sort_by,
                    &config.output,
                )
            } else {
                let stats = analyzer.analyze(&root)?;
                output::render_analysis(writer, &stats, &config.output)
            }
        }
        Task::FindLargeFiles { path, options } => {
            let root = normalize_path(path);
            if text {
                output::write_search_preamble(writer, &root, options)?;
            }
            let finder = LargeFileFinder::new(options.clone()).with_cancellation(token.clone());
            if options.group_by == GroupBy::None {
                let files = finder.find(&root)?;
                output::render_large_files(writer, &files, &root, &config.output)
            } else {
                let groups = finder.find_grouped(&root)?;
                output::render_grouped_files(writer, &groups, &config.output)
            }
        }
        Task::FindDuplicates => write_notice(writer, constants::DUPLICATES_NOTICE),
        Task::FindDuplicateFolders => write_notice(writer, constants::DUPLICATE_FOLDERS_NOTICE),
    }
}

fn write_notice(writer: &mut dyn Write, notice: &str) -> Result<()> {
    writeln!(writer, "{}", notice).map_err(Error::Output)
}
