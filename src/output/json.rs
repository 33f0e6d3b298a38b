// src/output/json.rs

//! JSON renderings of the reports (enabled by the `json` feature).

use crate::core_types::{FileInfo, StorageStats};
use std::collections::{BTreeMap, HashMap};
use std::io::{self, Write};
use std::path::PathBuf;

fn write_pretty<T: serde::Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(io::Error::from)?;
    writeln!(writer)
}

pub fn write_analysis_json(writer: &mut dyn Write, stats: &StorageStats) -> io::Result<()> {
    write_pretty(writer, stats)
}

/// Directory keys are rendered with `display()` so non-UTF-8 paths still serialize.
pub fn write_directory_json(
    writer: &mut dyn Write,
    buckets: &BTreeMap<PathBuf, StorageStats>,
) -> io::Result<()> {
    let keyed: BTreeMap<String, &StorageStats> = buckets
        .iter()
        .map(|(dir, stats)| (dir.display().to_string(), stats))
        .collect();
    write_pretty(writer, &keyed)
}

pub fn write_large_files_json(writer: &mut dyn Write, files: &[FileInfo]) -> io::Result<()> {
    write_pretty(writer, files)
}

pub fn write_grouped_json(
    writer: &mut dyn Write,
    groups: &HashMap<String, Vec<FileInfo>>,
) -> io::Result<()> {
    let sorted: BTreeMap<&String, &Vec<FileInfo>> = groups.iter().collect();
    write_pretty(writer, &sorted)
}
