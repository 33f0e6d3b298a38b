// src/output/analysis.rs

use crate::config::{OutputConfig, SortBy};
use crate::constants::{
    MAX_DIRECTORY_DISPLAY_LEN, ROOT_DIRECTORY_LABEL, TOP_DIRECTORIES_SHOWN, TOP_EXTENSIONS_SHOWN,
};
use crate::core_types::StorageStats;
use crate::output::formatter::{
    format_path_for_display, format_size, format_timestamp, rule, with_thousands,
};
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes the folder analysis summary, followed by the file type
/// distribution and largest files tables when enabled in `output`.
pub fn write_analysis_report(
    writer: &mut dyn Write,
    stats: &StorageStats,
    output: &OutputConfig,
) -> io::Result<()> {
    writeln!(writer, "{}", rule('='))?;
    writeln!(writer, "FOLDER ANALYSIS SUMMARY")?;
    writeln!(writer, "{}", rule('='))?;
    writeln!(writer, "Total Size:       {}", format_size(stats.total_size))?;
    writeln!(writer, "File Count:       {}", with_thousands(stats.file_count))?;
    writeln!(writer, "Directory Count:  {}", with_thousands(stats.directory_count))?;
    writeln!(writer, "Average File Size: {}", format_size(stats.average_file_size()))?;
    writeln!(writer)?;

    if let Some(deepest) = &stats.deepest_path {
        writeln!(writer, "Deepest Path:     {}", format_path_for_display(deepest))?;
        writeln!(writer, "Depth Level:      {}", stats.deepest_level)?;
        writeln!(writer)?;
    }

    if let Some(oldest) = &stats.oldest_file {
        writeln!(writer, "Oldest File:      {}", oldest.name())?;
        writeln!(writer, "                  {}", format_timestamp(oldest.modified))?;
    }
    if let Some(newest) = &stats.newest_file {
        writeln!(writer, "Newest File:      {}", newest.name())?;
        writeln!(writer, "                  {}", format_timestamp(newest.modified))?;
        writeln!(writer)?;
    }

    if output.show_extensions && !stats.extension_stats.is_empty() {
        write_extension_table(writer, stats)?;
    }
    if output.show_largest && !stats.largest_files.is_empty() {
        write_largest_files_table(writer, stats)?;
    }
    Ok(())
}

fn write_extension_table(writer: &mut dyn Write, stats: &StorageStats) -> io::Result<()> {
    writeln!(writer, "{}", rule('='))?;
    writeln!(writer, "FILE TYPE DISTRIBUTION")?;
    writeln!(writer, "{}", rule('='))?;
    writeln!(
        writer,
        "{:<15} {:>10} {:>15} {:>12}",
        "Extension", "Count", "Size", "% of Total"
    )?;
    writeln!(writer, "{}", rule('-'))?;

    let mut extensions: Vec<_> = stats.extension_stats.iter().collect();
    // Size descending; name breaks ties so the table is stable.
    extensions.sort_by(|a, b| b.1.total_size.cmp(&a.1.total_size).then_with(|| a.0.cmp(b.0)));

    for (ext, ext_stats) in extensions.into_iter().take(TOP_EXTENSIONS_SHOWN) {
        let percentage = if stats.total_size > 0 {
            ext_stats.total_size as f64 / stats.total_size as f64 * 100.0
        } else {
            0.0
        };
        writeln!(
            writer,
            "{:<15} {:>10} {:>15} {:>11.1}%",
            ext,
            with_thousands(ext_stats.count),
            format_size(ext_stats.total_size),
            percentage
        )?;
    }
    writeln!(writer)
}

fn write_largest_files_table(writer: &mut dyn Write, stats: &StorageStats) -> io::Result<()> {
    writeln!(writer, "{}", rule('='))?;
    writeln!(writer, "LARGEST FILES (Top {})", stats.largest_files.len())?;
    writeln!(writer, "{}", rule('='))?;
    writeln!(writer, "{:<15} {:<20} File", "Size", "Modified")?;
    writeln!(writer, "{}", rule('-'))?;

    for file in &stats.largest_files {
        writeln!(
            writer,
            "{:<15} {:<20} {}",
            format_size(file.size),
            format_timestamp(file.modified),
            file.name()
        )?;
    }
    writeln!(writer)
}

/// Writes the per-directory table: at most the top 50 directories in
/// `sort_by` order, paths shown relative to `root`.
pub fn write_directory_report(
    writer: &mut dyn Write,
    buckets: &BTreeMap<PathBuf, StorageStats>,
    root: &Path,
    sort_by: SortBy,
) -> io::Result<()> {
    writeln!(writer, "{}", rule('='))?;
    writeln!(writer, "DIRECTORY ANALYSIS")?;
    writeln!(writer, "{}", rule('='))?;
    writeln!(writer, "{:<45} {:>8} {:>8} {:>15}", "Directory", "Files", "Dirs", "Size")?;
    writeln!(writer, "{}", rule('-'))?;

    for (dir, stats) in sort_directories(buckets, sort_by)
        .into_iter()
        .take(TOP_DIRECTORIES_SHOWN)
    {
        writeln!(
            writer,
            "{:<45} {:>8} {:>8} {:>15}",
            directory_label(dir, root),
            with_thousands(stats.file_count),
            with_thousands(stats.directory_count),
            format_size(stats.total_size)
        )?;
    }
    Ok(())
}

/// Orders directory buckets for display. The map is already name-ordered,
/// and the stable sorts keep that order among equal sizes or counts.
pub(crate) fn sort_directories(
    buckets: &BTreeMap<PathBuf, StorageStats>,
    sort_by: SortBy,
) -> Vec<(&PathBuf, &StorageStats)> {
    let mut sorted: Vec<_> = buckets.iter().collect();
    match sort_by {
        SortBy::Size => sorted.sort_by(|a, b| b.1.total_size.cmp(&a.1.total_size)),
        SortBy::Count => sorted.sort_by(|a, b| b.1.file_count.cmp(&a.1.file_count)),
        SortBy::Name => {}
    }
    sorted
}

fn directory_label(dir: &Path, root: &Path) -> String {
    let label = match dir.strip_prefix(root) {
        Ok(relative) if relative.as_os_str().is_empty() => ROOT_DIRECTORY_LABEL.to_string(),
        Ok(relative) => format_path_for_display(relative),
        Err(_) => format_path_for_display(dir),
    };
    truncate_front(&label, MAX_DIRECTORY_DISPLAY_LEN)
}

/// Shortens `label` to `"..."` plus its last `max_len - 3` characters when
/// it is longer than `max_len`.
fn truncate_front(label: &str, max_len: usize) -> String {
    let len = label.chars().count();
    if len <= max_len {
        return label.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let tail: String = label.chars().skip(len - keep).collect();
    format!("...{}", tail)
}
