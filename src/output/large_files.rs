// src/output/large_files.rs

use crate::core_types::FileInfo;
use crate::output::formatter::{
    format_path_for_display, format_relative_path, format_size, format_timestamp, rule,
};
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;

const NO_FILES_MESSAGE: &str = "No files found.";

/// Writes the ungrouped large-file table.
///
/// With `relative_to` set, paths are shown relative to that directory.
pub fn write_large_files_report(
    writer: &mut dyn Write,
    files: &[FileInfo],
    relative_to: Option<&Path>,
) -> io::Result<()> {
    if files.is_empty() {
        return writeln!(writer, "{}", NO_FILES_MESSAGE);
    }

    let total: u64 = files.iter().map(|f| f.size).sum();
    writeln!(
        writer,
        "Found {} large files (Total: {} -> {})",
        files.len(),
        format_size(files[0].size),
        format_size(total)
    )?;
    writeln!(writer)?;
    write_file_rows(writer, files, |file| match relative_to {
        Some(root) => format_relative_path(&file.path, root),
        None => format_path_for_display(&file.path),
    })
}

/// Writes one table per group, largest group (by total size) first.
pub fn write_grouped_report(
    writer: &mut dyn Write,
    groups: &HashMap<String, Vec<FileInfo>>,
) -> io::Result<()> {
    let mut sorted: Vec<(&String, &Vec<FileInfo>, u64)> = groups
        .iter()
        .filter(|(_, files)| !files.is_empty())
        .map(|(key, files)| (key, files, files.iter().map(|f| f.size).sum()))
        .collect();
    if sorted.is_empty() {
        return writeln!(writer, "{}", NO_FILES_MESSAGE);
    }
    sorted.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(b.0)));

    for (key, files, total) in sorted {
        writeln!(writer)?;
        writeln!(writer, "{}", rule('='))?;
        writeln!(writer, "Group: {}", key)?;
        writeln!(writer, "Total: {} ({} files)", format_size(total), files.len())?;
        writeln!(writer, "{}", rule('='))?;
        writeln!(writer)?;
        write_file_rows(writer, files, |file| format_path_for_display(&file.path))?;
    }
    Ok(())
}

fn write_file_rows(
    writer: &mut dyn Write,
    files: &[FileInfo],
    display: impl Fn(&FileInfo) -> String,
) -> io::Result<()> {
    writeln!(writer, "{:<12} {:<20} File", "Size", "Modified")?;
    writeln!(writer, "{}", rule('-'))?;
    for file in files {
        writeln!(
            writer,
            "{:<12} {:<20} {}",
            format_size(file.size),
            format_timestamp(file.modified),
            display(file)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(path: &str, size: u64) -> FileInfo {
        FileInfo {
            path: PathBuf::from(path),
            size,
            modified: 0.0,
            is_symlink: false,
        }
    }

    fn render_list(files: &[FileInfo], relative_to: Option<&Path>) -> String {
        let mut buf = Vec::new();
        write_large_files_report(&mut buf, files, relative_to).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render_list(&[], None), "No files found.\n");
        let mut buf = Vec::new();
        write_grouped_report(&mut buf, &HashMap::new()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No files found.\n");
    }

    #[test]
    fn test_list_header_and_paths() {
        let files = vec![file("/data/a/big.iso", 2048), file("/data/small.txt", 1024)];
        let text = render_list(&files, None);
        assert!(text.starts_with("Found 2 large files (Total: 2.00 KB -> 3.00 KB)"));
        assert!(text.contains("/data/a/big.iso"));

        let text = render_list(&files, Some(Path::new("/data")));
        assert!(text.contains(" a/big.iso"));
        assert!(!text.contains("/data/a/big.iso"));
    }

    #[test]
    fn test_groups_sorted_by_total() {
        let mut groups = HashMap::new();
        groups.insert("txt".to_string(), vec![file("/d/a.txt", 10)]);
        groups.insert("pdf".to_string(), vec![file("/d/b.pdf", 500)]);
        let mut buf = Vec::new();
        write_grouped_report(&mut buf, &groups).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let pdf = text.find("Group: pdf").unwrap();
        let txt = text.find("Group: txt").unwrap();
        assert!(pdf < txt);
        assert!(text.contains("Total: 500 B (1 files)"));
    }
}
