// src/constants.rs

/// Width of the `=` and `-` rules framing every report section.
pub const REPORT_WIDTH: usize = 80;

/// Extensions listed in the file type distribution table.
pub const TOP_EXTENSIONS_SHOWN: usize = 20;

/// Directories listed in the per-directory report.
pub const TOP_DIRECTORIES_SHOWN: usize = 50;

/// Directory paths longer than this are shortened to their tail.
pub const MAX_DIRECTORY_DISPLAY_LEN: usize = 43;

/// Label used for the analysis root in the per-directory report.
pub const ROOT_DIRECTORY_LABEL: &str = "(root)";

/// Display format for file modification times (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Message printed by the placeholder `find-duplicates` command.
pub const DUPLICATES_NOTICE: &str = "Duplicate files search feature - Coming soon!";

/// Message printed by the placeholder `find-duplicate-folders` command.
pub const DUPLICATE_FOLDERS_NOTICE: &str = "Duplicate folders search feature - Coming soon!";
