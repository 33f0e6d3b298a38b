// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn storage_tools_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("storage-tools"))
}

/// A temp dir whose own name is not hidden. (`tempfile::tempdir()` names
/// start with `.tmp`, which the hidden rule would exclude wholesale.)
#[allow(dead_code)]
pub fn visible_tempdir() -> std::io::Result<TempDir> {
    tempfile::Builder::new().prefix("storage-tools-test").tempdir()
}

/// Writes `size` bytes to `root/relative_path`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(root: &Path, relative_path: &str, size: usize) -> std::io::Result<()> {
    let file_path = root.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, vec![b'x'; size])
}

/// The analysis tree:
///
/// ```text
/// file1.txt (100)  file2.txt (200)  file3.pdf (300)  file4.py (400)
/// .hidden.txt (100)
/// subdir1/sub_file1.txt (500)  subdir1/sub_file2.log (600)
/// subdir1/nested/deep_file.txt (800)
/// subdir2/sub_file3.txt (700)
/// ```
#[allow(dead_code)]
pub fn analysis_fixture() -> std::io::Result<TempDir> {
    let temp = visible_tempdir()?;
    let root = temp.path();
    create_file(root, "file1.txt", 100)?;
    create_file(root, "file2.txt", 200)?;
    create_file(root, "file3.pdf", 300)?;
    create_file(root, "file4.py", 400)?;
    create_file(root, "subdir1/sub_file1.txt", 500)?;
    create_file(root, "subdir1/sub_file2.log", 600)?;
    create_file(root, "subdir2/sub_file3.txt", 700)?;
    create_file(root, "subdir1/nested/deep_file.txt", 800)?;
    create_file(root, ".hidden.txt", 100)?;
    Ok(temp)
}

/// The search tree:
///
/// ```text
/// small.txt (100)  medium.txt (1000)  large.txt (10000)  huge.pdf (100000)
/// subdir/sub_large.txt (50000)
/// .hidden.txt (5000)
/// ```
#[allow(dead_code)]
pub fn search_fixture() -> std::io::Result<TempDir> {
    let temp = visible_tempdir()?;
    let root = temp.path();
    create_file(root, "small.txt", 100)?;
    create_file(root, "medium.txt", 1000)?;
    create_file(root, "large.txt", 10_000)?;
    create_file(root, "huge.pdf", 100_000)?;
    create_file(root, "subdir/sub_large.txt", 50_000)?;
    create_file(root, ".hidden.txt", 5000)?;
    Ok(temp)
}
