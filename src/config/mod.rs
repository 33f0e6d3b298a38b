//! Defines the `Config` struct and the option types consumed by the walker,
//! the analyzer and the large-file finder.
//!
//! Everything here is an immutable snapshot: options are built once (from the
//! CLI or programmatically) and then only read.

use glob::Pattern;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};

mod builder;
mod parsing;
pub mod path_resolve;
mod validation;

pub use parsing::{parse_date, parse_size};
pub use path_resolve::normalize_path;

/// A single exclusion rule.
///
/// Globs are matched against both the full path string and the base name;
/// regexes are searched (unanchored) in the full path string only.
#[derive(Clone)]
pub enum ExcludePattern {
    Glob(Pattern),
    Regex(Regex),
}

impl ExcludePattern {
    /// Compiles a glob-style pattern (`*`, `?`, `[...]`).
    pub fn glob(pattern: &str) -> Result<Self, glob::PatternError> {
        Pattern::new(pattern).map(Self::Glob)
    }

    /// Compiles a regular expression.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::Regex)
    }

    /// The pattern source as given on the command line.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Glob(glob) => glob.as_str(),
            Self::Regex(re) => re.as_str(),
        }
    }

    /// Returns `true` if this pattern excludes `path`.
    pub fn matches(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        match self {
            Self::Glob(glob) => {
                glob.matches(&path_str)
                    || path
                        .file_name()
                        .is_some_and(|name| glob.matches(&name.to_string_lossy()))
            }
            Self::Regex(re) => re.is_match(&path_str),
        }
    }
}

impl fmt::Debug for ExcludePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Glob(_) => "Glob",
            Self::Regex(_) => "Regex",
        };
        f.debug_tuple(kind).field(&self.as_str()).finish()
    }
}

/// Settings for one walk of a directory tree.
#[derive(Debug, Clone, Default)]
pub struct TraversalConfig {
    /// Follow symbolic links to files and directories.
    pub follow_symlinks: bool,
    /// Include entries whose path contains a component starting with `.`.
    pub include_hidden: bool,
    /// Exclusion rules; any match skips the entry (and everything below it).
    pub exclude_patterns: Vec<ExcludePattern>,
    /// Number of directory descents allowed below the root. `Some(0)` visits
    /// only the files directly in the root; `None` is unlimited.
    pub max_depth: Option<usize>,
}

/// Sort order for the per-directory report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortBy {
    /// Largest total size first.
    #[default]
    Size,
    /// Alphabetical by directory path.
    Name,
    /// Most files first.
    Count,
}

/// Grouping mode for large-file search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum GroupBy {
    /// Every file lands in the single group `"all"`.
    #[default]
    #[value(skip)]
    None,
    /// Group by the full path of the immediate parent directory.
    #[value(name = "dir")]
    Directory,
    /// Group by lowercase extension (`"(no extension)"` when empty).
    #[value(name = "ext")]
    Extension,
}

/// Options for `FolderAnalyzer`.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub traversal: TraversalConfig,
    /// How many of the largest files to keep in `StorageStats::largest_files`.
    pub track_largest_n: usize,
    /// Ordering used when rendering the per-directory report.
    pub sort_by: SortBy,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            traversal: TraversalConfig::default(),
            track_largest_n: 10,
            sort_by: SortBy::Size,
        }
    }
}

/// Options for `LargeFileFinder`.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub traversal: TraversalConfig,
    /// Maximum number of files reported (per group, in grouped mode).
    pub top_n: usize,
    /// Files smaller than this many bytes are ignored.
    pub min_size: u64,
    /// Lowercase extensions without a leading dot. `None` accepts every file.
    pub extensions: Option<Vec<String>>,
    /// Cutoff in seconds since the Unix epoch; older files are ignored.
    pub modified_since: Option<f64>,
    pub group_by: GroupBy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            traversal: TraversalConfig::default(),
            top_n: 20,
            min_size: 0,
            extensions: None,
            modified_since: None,
            group_by: GroupBy::None,
        }
    }
}

/// Report encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// Pretty-printed JSON (requires the `json` feature).
    Json,
}

/// Configuration options related to rendering the report.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Show the file type distribution in the analysis summary.
    pub show_extensions: bool,
    /// Show the largest-files table in the analysis summary.
    pub show_largest: bool,
    /// Show large-file paths relative to the search root.
    pub relative_paths: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_extensions: true,
            show_largest: true,
            relative_paths: false,
        }
    }
}

/// The unit of work selected on the command line.
#[derive(Debug, Clone)]
pub enum Task {
    /// Aggregate statistics for the whole tree, or per directory.
    Analyze {
        path: PathBuf,
        options: AnalysisOptions,
        by_directory: bool,
    },
    /// Largest files, optionally grouped.
    FindLargeFiles { path: PathBuf, options: SearchOptions },
    /// Placeholder command; content-based dedup is not implemented.
    FindDuplicates,
    /// Placeholder command; folder dedup is not implemented.
    FindDuplicateFolders,
}

/// Fully validated configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub task: Task,
    pub output: OutputConfig,
}
