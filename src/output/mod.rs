// src/output/mod.rs

//! Renders analysis and search results as text tables or JSON.

use crate::config::{AnalysisOptions, OutputConfig, OutputFormat, SearchOptions, SortBy};
use crate::core_types::{FileInfo, StorageStats};
use crate::errors::{Error, Result};
use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod analysis;
pub mod formatter;
#[cfg(feature = "json")]
pub mod json;
pub mod large_files;

pub use formatter::{format_size, format_size_with_precision};

/// Writes the lines announcing an analysis run (text output only).
pub fn write_analysis_preamble(
    writer: &mut dyn Write,
    root: &Path,
    options: &AnalysisOptions,
) -> Result<()> {
    analysis_preamble(writer, root, options).map_err(Error::Output)
}

fn analysis_preamble(
    writer: &mut dyn Write,
    root: &Path,
    options: &AnalysisOptions,
) -> io::Result<()> {
    let traversal = &options.traversal;
    writeln!(writer, "Analyzing folder: {}", root.display())?;
    if let Some(depth) = traversal.max_depth {
        writeln!(writer, "Maximum depth: {}", depth)?;
    }
    if !traversal.exclude_patterns.is_empty() {
        let patterns: Vec<&str> = traversal
            .exclude_patterns
            .iter()
            .map(|p| p.as_str())
            .collect();
        writeln!(writer, "Excluding: {}", patterns.join(", "))?;
    }
    writeln!(writer)
}

/// Writes the lines announcing a large-file search (text output only).
pub fn write_search_preamble(
    writer: &mut dyn Write,
    root: &Path,
    options: &SearchOptions,
) -> Result<()> {
    search_preamble(writer, root, options).map_err(Error::Output)
}

fn search_preamble(writer: &mut dyn Write, root: &Path, options: &SearchOptions) -> io::Result<()> {
    writeln!(writer, "Searching for large files in: {}", root.display())?;
    if options.min_size > 0 {
        writeln!(writer, "Minimum size: {}", format_size(options.min_size))?;
    }
    if let Some(exts) = &options.extensions {
        writeln!(writer, "Extensions: {}", exts.join(", "))?;
    }
    if let Some(since) = options.modified_since {
        writeln!(writer, "Modified since: {}", formatter::format_timestamp(since))?;
    }
    writeln!(writer)
}

/// Writes the whole-tree analysis report.
pub fn render_analysis(
    writer: &mut dyn Write,
    stats: &StorageStats,
    output: &OutputConfig,
) -> Result<()> {
    debug!("Rendering analysis report as {:?}", output.format);
    let result = match output.format {
        OutputFormat::Text => analysis::write_analysis_report(writer, stats, output),
        #[cfg(feature = "json")]
        OutputFormat::Json => json::write_analysis_json(writer, stats),
        #[cfg(not(feature = "json"))]
        OutputFormat::Json => Err(json_unsupported()),
    };
    finish(writer, result)
}

/// Writes the per-directory report for an analysis rooted at `root`.
pub fn render_directory_analysis(
    writer: &mut dyn Write,
    buckets: &BTreeMap<PathBuf, StorageStats>,
    root: &Path,
    sort_by: SortBy,
    output: &OutputConfig,
) -> Result<()> {
    debug!("Rendering directory report for {} directories", buckets.len());
    let result = match output.format {
        OutputFormat::Text => analysis::write_directory_report(writer, buckets, root, sort_by),
        #[cfg(feature = "json")]
        OutputFormat::Json => json::write_directory_json(writer, buckets),
        #[cfg(not(feature = "json"))]
        OutputFormat::Json => Err(json_unsupported()),
    };
    finish(writer, result)
}

/// Writes an ungrouped large-file list for a search rooted at `root`.
pub fn render_large_files(
    writer: &mut dyn Write,
    files: &[FileInfo],
    root: &Path,
    output: &OutputConfig,
) -> Result<()> {
    let result = match output.format {
        OutputFormat::Text => {
            let relative_to = output.relative_paths.then_some(root);
            large_files::write_large_files_report(writer, files, relative_to)
        }
        #[cfg(feature = "json")]
        OutputFormat::Json => json::write_large_files_json(writer, files),
        #[cfg(not(feature = "json"))]
        OutputFormat::Json => Err(json_unsupported()),
    };
    finish(writer, result)
}

/// Writes grouped large-file results.
pub fn render_grouped_files(
    writer: &mut dyn Write,
    groups: &HashMap<String, Vec<FileInfo>>,
    output: &OutputConfig,
) -> Result<()> {
    let result = match output.format {
        OutputFormat::Text => large_files::write_grouped_report(writer, groups),
        #[cfg(feature = "json")]
        OutputFormat::Json => json::write_grouped_json(writer, groups),
        #[cfg(not(feature = "json"))]
        OutputFormat::Json => Err(json_unsupported()),
    };
    finish(writer, result)
}

#[cfg(not(feature = "json"))]
fn json_unsupported() -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        "JSON output requires the 'json' feature",
    )
}

fn finish(writer: &mut dyn Write, result: io::Result<()>) -> Result<()> {
    result.and_then(|()| writer.flush()).map_err(Error::Output)
}
