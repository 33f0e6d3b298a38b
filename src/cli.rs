// src/cli.rs

use crate::config::{GroupBy, OutputFormat, SortBy};
use clap::{Args, Parser, Subcommand};

/// Storage Tools - analyze disk usage and find large files.
///
/// Every command is read-only: directory trees are scanned and summarized,
/// nothing on disk is modified.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze folder disk usage and statistics in PATH (default: current directory).
    Analyze(AnalyzeArgs),

    /// Find the largest files in PATH (default: current directory).
    FindLargeFiles(FindLargeFilesArgs),

    /// Find duplicate files based on content.
    FindDuplicates,

    /// Find duplicate folders with similar content.
    FindDuplicateFolders,
}

/// Traversal options shared by every scanning command.
#[derive(Args, Debug, Clone)]
pub struct TraversalArgs {
    /// Maximum directory depth to traverse (0 = only files directly in PATH).
    #[arg(long, value_name = "N")]
    pub depth: Option<usize>,

    /// Exclude paths matching these glob patterns (matched against the full path and the file name, repeatable).
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Exclude paths whose full path matches any of these regexes (repeatable).
    #[arg(long = "exclude-regex", value_name = "REGEX")]
    pub exclude_regex: Vec<String>,

    /// Follow symbolic links.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub follow_symlinks: bool,

    /// Include hidden files and directories.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub include_hidden: bool,
}

/// Report options shared by every scanning command.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Directory to analyze.
    #[arg(default_value = ".")]
    pub path: String,

    #[command(flatten)]
    pub traversal: TraversalArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Sort criterion for the per-directory report.
    #[arg(long, value_enum, ignore_case = true, default_value_t = SortBy::Size)]
    pub sort_by: SortBy,

    /// Show analysis broken down by directory.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub by_directory: bool,

    /// Number of largest files to show in the summary.
    #[arg(short = 'n', long, value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Don't show the file type distribution.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_extensions: bool,

    /// Don't show the largest files.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_largest: bool,
}

#[derive(Args, Debug, Clone)]
pub struct FindLargeFilesArgs {
    /// Directory to search.
    #[arg(default_value = ".")]
    pub path: String,

    #[command(flatten)]
    pub traversal: TraversalArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Number of largest files to show (per group when grouping).
    #[arg(short = 'n', long, value_name = "N", default_value_t = 20)]
    pub top: usize,

    /// Minimum file size (e.g., 10MB, 1.5GB, or a plain byte count).
    #[arg(long, value_name = "SIZE")]
    pub min_size: Option<String>,

    /// Only include files with this extension (case-insensitive, e.g. pdf, jpg; repeatable).
    #[arg(short = 'e', long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Only show files modified on or after this date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub modified_since: Option<String>,

    /// Group results by directory or extension.
    #[arg(long, value_enum, ignore_case = true)]
    pub group_by: Option<GroupBy>,

    /// Show paths relative to the search directory.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub relative: bool,
}
