// tests/library_api.rs

mod common;

use common::{analysis_fixture, create_file, search_fixture, visible_tempdir};
use std::collections::HashSet;
use std::path::PathBuf;
use storage_tools::prelude::*;

type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

fn sizes(files: &[FileInfo]) -> Vec<u64> {
    files.iter().map(|f| f.size).collect()
}

// --- FolderAnalyzer ---

#[test]
fn test_analyze_basic_totals() -> TestResult {
    let temp = analysis_fixture()?;
    let stats = FolderAnalyzer::new(AnalysisOptions::default()).analyze(temp.path())?;

    assert_eq!(stats.file_count, 8);
    assert_eq!(stats.total_size, 3600);
    assert_eq!(stats.directory_count, 3);
    assert_eq!(stats.average_file_size(), 450);
    Ok(())
}

#[test]
fn test_analyze_extension_stats() -> TestResult {
    let temp = analysis_fixture()?;
    let stats = FolderAnalyzer::default().analyze(temp.path())?;

    assert_eq!(
        stats.extension_stats["txt"],
        ExtensionStats {
            count: 5,
            total_size: 2300
        }
    );
    assert_eq!(stats.extension_stats["pdf"].count, 1);
    assert_eq!(stats.extension_stats["py"].total_size, 400);
    assert_eq!(stats.extension_stats["log"].total_size, 600);

    let classified: u64 = stats.extension_stats.values().map(|e| e.total_size).sum();
    assert_eq!(classified, stats.total_size);
    Ok(())
}

#[test]
fn test_analyze_largest_files_top_three() -> TestResult {
    let temp = analysis_fixture()?;
    let options = AnalysisOptions {
        track_largest_n: 3,
        ..Default::default()
    };
    let stats = FolderAnalyzer::new(options).analyze(temp.path())?;
    assert_eq!(sizes(&stats.largest_files), vec![800, 700, 600]);
    Ok(())
}

#[test]
fn test_analyze_deepest_path() -> TestResult {
    let temp = analysis_fixture()?;
    let stats = FolderAnalyzer::default().analyze(temp.path())?;
    assert_eq!(stats.deepest_level, 3);
    let deepest = stats.deepest_path.expect("deepest path");
    assert!(deepest.ends_with("subdir1/nested/deep_file.txt"));
    Ok(())
}

#[test]
fn test_analyze_oldest_and_newest_present() -> TestResult {
    let temp = analysis_fixture()?;
    let stats = FolderAnalyzer::default().analyze(temp.path())?;
    let oldest = stats.oldest_file.expect("oldest");
    let newest = stats.newest_file.expect("newest");
    assert!(oldest.modified <= newest.modified);
    Ok(())
}

#[test]
fn test_analyze_max_depth_one() -> TestResult {
    let temp = analysis_fixture()?;
    let options = AnalysisOptions {
        traversal: TraversalConfig {
            max_depth: Some(1),
            ..Default::default()
        },
        ..Default::default()
    };
    let stats = FolderAnalyzer::new(options).analyze(temp.path())?;
    assert_eq!(stats.file_count, 7);
    assert_eq!(stats.directory_count, 2);
    Ok(())
}

#[test]
fn test_analyze_max_depth_zero_counts_no_directories() -> TestResult {
    let temp = visible_tempdir()?;
    create_file(temp.path(), "top.txt", 10)?;
    create_file(temp.path(), "a/b/inner.txt", 10)?;
    std::fs::create_dir(temp.path().join("c"))?;
    let options = AnalysisOptions {
        traversal: TraversalConfig {
            max_depth: Some(0),
            ..Default::default()
        },
        ..Default::default()
    };
    let stats = FolderAnalyzer::new(options).analyze(temp.path())?;
    assert_eq!(stats.file_count, 1);
    assert_eq!(stats.directory_count, 0);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_analyze_survives_unreadable_directory() -> TestResult {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let temp = analysis_fixture()?;
    let locked = temp.path().join("subdir1");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;
    if fs::read_dir(&locked).is_ok() {
        // Permission bits are not enforced for this user.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        return Ok(());
    }

    let config = TraversalConfig::default();
    let walked: Vec<String> = walk_directory(temp.path(), &config)?
        .map(|f| f.name())
        .collect();
    let stats = FolderAnalyzer::default().analyze(temp.path());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

    let mut walked = walked;
    walked.sort();
    assert_eq!(
        walked,
        vec!["file1.txt", "file2.txt", "file3.pdf", "file4.py", "sub_file3.txt"]
    );
    let stats = stats?;
    assert_eq!(stats.file_count, 5);
    assert_eq!(stats.total_size, 1700);
    Ok(())
}

#[test]
fn test_analyze_include_hidden() -> TestResult {
    let temp = analysis_fixture()?;
    let options = AnalysisOptions {
        traversal: TraversalConfig {
            include_hidden: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let stats = FolderAnalyzer::new(options).analyze(temp.path())?;
    assert_eq!(stats.file_count, 9);
    assert_eq!(stats.total_size, 3700);
    Ok(())
}

#[test]
fn test_analyze_exclude_patterns() -> TestResult {
    let temp = analysis_fixture()?;
    let options = AnalysisOptions {
        traversal: TraversalConfig {
            exclude_patterns: vec![ExcludePattern::glob("*.log")?, ExcludePattern::regex(r"\.py$")?],
            ..Default::default()
        },
        ..Default::default()
    };
    let stats = FolderAnalyzer::new(options).analyze(temp.path())?;
    assert_eq!(stats.file_count, 6);
    assert!(!stats.extension_stats.contains_key("log"));
    assert!(!stats.extension_stats.contains_key("py"));
    // Excluding files does not change the directory count.
    assert_eq!(stats.directory_count, 3);
    Ok(())
}

#[test]
fn test_analyze_errors() -> TestResult {
    let temp = analysis_fixture()?;
    let analyzer = FolderAnalyzer::default();

    let missing = temp.path().join("does-not-exist");
    assert!(matches!(analyzer.analyze(&missing), Err(Error::NotFound(_))));

    let file = temp.path().join("file1.txt");
    assert!(matches!(analyzer.analyze(&file), Err(Error::NotADirectory(_))));
    Ok(())
}

#[test]
fn test_analyze_by_directory_buckets() -> TestResult {
    let temp = analysis_fixture()?;
    let analyzer = FolderAnalyzer::default();
    let buckets = analyzer.analyze_by_directory(temp.path())?;
    let root = normalize_path(temp.path());

    assert_eq!(buckets.len(), 4);

    let root_stats = &buckets[&root];
    assert_eq!(root_stats.file_count, 4);
    assert_eq!(root_stats.total_size, 1000);
    assert_eq!(root_stats.directory_count, 2);

    let subdir1 = &buckets[&root.join("subdir1")];
    assert_eq!(subdir1.file_count, 2);
    assert_eq!(subdir1.total_size, 1100);
    assert_eq!(subdir1.directory_count, 1);
    assert_eq!(subdir1.extension_stats["log"].count, 1);

    let nested = &buckets[&root.join("subdir1").join("nested")];
    assert_eq!(nested.file_count, 1);
    assert_eq!(nested.directory_count, 0);
    Ok(())
}

#[test]
fn test_analyze_by_directory_counts_add_up() -> TestResult {
    let temp = analysis_fixture()?;
    for include_hidden in [false, true] {
        let options = AnalysisOptions {
            traversal: TraversalConfig {
                include_hidden,
                ..Default::default()
            },
            ..Default::default()
        };
        let analyzer = FolderAnalyzer::new(options);
        let total = analyzer.analyze(temp.path())?;
        let buckets = analyzer.analyze_by_directory(temp.path())?;

        let bucket_files: u64 = buckets.values().map(|s| s.file_count).sum();
        let bucket_bytes: u64 = buckets.values().map(|s| s.total_size).sum();
        assert_eq!(bucket_files, total.file_count);
        assert_eq!(bucket_bytes, total.total_size);
    }
    Ok(())
}

#[test]
fn test_analyze_by_directory_skips_fileless_dirs() -> TestResult {
    let temp = visible_tempdir()?;
    create_file(temp.path(), "only/in/deep/file.bin", 10)?;
    let buckets = FolderAnalyzer::default().analyze_by_directory(temp.path())?;
    assert_eq!(buckets.len(), 1);
    let key: &PathBuf = buckets.keys().next().expect("one bucket");
    assert!(key.ends_with("only/in/deep"));
    Ok(())
}

// --- Walker ---

#[test]
fn test_walk_depth_zero_with_deep_files_only() -> TestResult {
    let temp = visible_tempdir()?;
    create_file(temp.path(), "a/b/one.txt", 10)?;
    create_file(temp.path(), "c/d/two.txt", 10)?;
    let config = TraversalConfig {
        max_depth: Some(0),
        ..Default::default()
    };
    assert_eq!(walk_directory(temp.path(), &config)?.count(), 0);
    Ok(())
}

#[test]
fn test_walk_never_yields_hidden_descendants() -> TestResult {
    let temp = visible_tempdir()?;
    create_file(temp.path(), ".cache/a/b/blob.bin", 10)?;
    create_file(temp.path(), "visible/.dotfile", 10)?;
    create_file(temp.path(), "visible/plain.txt", 10)?;

    let root = normalize_path(temp.path());
    let config = TraversalConfig::default();
    for file in walk_directory(&root, &config)? {
        let relative = file.path.strip_prefix(&root)?;
        assert!(
            !relative
                .components()
                .any(|c| c.as_os_str().to_string_lossy().starts_with('.')),
            "hidden path yielded: {}",
            file.path.display()
        );
    }
    assert_eq!(walk_directory(&root, &config)?.count(), 1);
    Ok(())
}

// --- LargeFileFinder ---

#[test]
fn test_find_basic() -> TestResult {
    let temp = search_fixture()?;
    let files = LargeFileFinder::default().find(temp.path())?;
    assert_eq!(files.len(), 5);
    assert_eq!(sizes(&files), vec![100_000, 50_000, 10_000, 1000, 100]);
    Ok(())
}

#[test]
fn test_find_top_two() -> TestResult {
    let temp = search_fixture()?;
    let finder = LargeFileFinder::new(SearchOptions {
        top_n: 2,
        ..Default::default()
    });
    let files = finder.find(temp.path())?;
    let names: Vec<String> = files.iter().map(FileInfo::name).collect();
    assert_eq!(names, vec!["huge.pdf", "sub_large.txt"]);
    Ok(())
}

#[test]
fn test_find_min_size() -> TestResult {
    let temp = search_fixture()?;
    let finder = LargeFileFinder::new(SearchOptions {
        min_size: 5000,
        ..Default::default()
    });
    let files = finder.find(temp.path())?;
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| f.size >= 5000));
    Ok(())
}

#[test]
fn test_find_extension_filter() -> TestResult {
    let temp = search_fixture()?;
    let finder = LargeFileFinder::new(SearchOptions {
        extensions: Some(vec!["txt".to_string()]),
        ..Default::default()
    });
    let files = finder.find(temp.path())?;
    assert_eq!(files.len(), 4);
    assert!(files.iter().all(|f| f.extension() == "txt"));
    Ok(())
}

#[test]
fn test_find_include_hidden() -> TestResult {
    let temp = search_fixture()?;
    let finder = LargeFileFinder::new(SearchOptions {
        traversal: TraversalConfig {
            include_hidden: true,
            ..Default::default()
        },
        ..Default::default()
    });
    assert_eq!(finder.find(temp.path())?.len(), 6);
    Ok(())
}

#[test]
fn test_find_max_depth_zero() -> TestResult {
    let temp = search_fixture()?;
    let finder = LargeFileFinder::new(SearchOptions {
        traversal: TraversalConfig {
            max_depth: Some(0),
            ..Default::default()
        },
        ..Default::default()
    });
    let files = finder.find(temp.path())?;
    assert_eq!(files.len(), 4);
    assert!(files.iter().all(|f| f.name() != "sub_large.txt"));
    Ok(())
}

#[test]
fn test_find_grouped_by_extension() -> TestResult {
    let temp = search_fixture()?;
    let finder = LargeFileFinder::new(SearchOptions {
        top_n: 10,
        group_by: GroupBy::Extension,
        ..Default::default()
    });
    let groups = finder.find_grouped(temp.path())?;
    assert_eq!(groups.len(), 2);
    assert_eq!(groups["txt"].len(), 4);
    assert_eq!(groups["pdf"].len(), 1);
    assert_eq!(sizes(&groups["txt"]), vec![50_000, 10_000, 1000, 100]);
    Ok(())
}

#[test]
fn test_find_grouped_by_directory() -> TestResult {
    let temp = search_fixture()?;
    let finder = LargeFileFinder::new(SearchOptions {
        group_by: GroupBy::Directory,
        ..Default::default()
    });
    let groups = finder.find_grouped(temp.path())?;
    assert_eq!(groups.len(), 2);

    let root = normalize_path(temp.path());
    let root_key = root.display().to_string();
    let sub_key = root.join("subdir").display().to_string();
    assert_eq!(groups[&root_key].len(), 4);
    assert_eq!(groups[&sub_key].len(), 1);
    Ok(())
}

#[test]
fn test_grouped_top_n_is_per_group() -> TestResult {
    let temp = search_fixture()?;
    let finder = LargeFileFinder::new(SearchOptions {
        top_n: 1,
        group_by: GroupBy::Extension,
        ..Default::default()
    });
    let groups = finder.find_grouped(temp.path())?;
    assert_eq!(groups["txt"].len(), 1);
    assert_eq!(groups["txt"][0].name(), "sub_large.txt");
    assert_eq!(groups["pdf"].len(), 1);
    Ok(())
}

#[test]
fn test_exclude_log_in_grouped_and_ungrouped() -> TestResult {
    let temp = search_fixture()?;
    create_file(temp.path(), "app.log", 20_000)?;
    create_file(temp.path(), "subdir/trace.log", 30_000)?;

    let traversal = TraversalConfig {
        exclude_patterns: vec![ExcludePattern::glob("*.log")?],
        ..Default::default()
    };

    let ungrouped = LargeFileFinder::new(SearchOptions {
        traversal: traversal.clone(),
        ..Default::default()
    })
    .find(temp.path())?;
    assert_eq!(ungrouped.len(), 5);
    assert!(ungrouped.iter().all(|f| f.extension() != "log"));

    let grouped = LargeFileFinder::new(SearchOptions {
        traversal,
        group_by: GroupBy::Extension,
        ..Default::default()
    })
    .find_grouped(temp.path())?;
    let keys: HashSet<&str> = grouped.keys().map(String::as_str).collect();
    assert_eq!(keys, HashSet::from(["txt", "pdf"]));
    Ok(())
}

#[test]
fn test_find_no_extension_group() -> TestResult {
    let temp = visible_tempdir()?;
    create_file(temp.path(), "Makefile", 10)?;
    create_file(temp.path(), "LICENSE", 20)?;
    let finder = LargeFileFinder::new(SearchOptions {
        group_by: GroupBy::Extension,
        ..Default::default()
    });
    let groups = finder.find_grouped(temp.path())?;
    assert_eq!(groups["(no extension)"].len(), 2);
    Ok(())
}

#[test]
fn test_tracker_matches_sort_and_truncate_on_real_tree() -> TestResult {
    let temp = analysis_fixture()?;
    let config = TraversalConfig::default();
    let all: Vec<FileInfo> = walk_directory(&normalize_path(temp.path()), &config)?.collect();

    for n in 1..=all.len() {
        let mut tracker = TopNTracker::new(n)?;
        for file in &all {
            tracker.add(file.clone());
        }
        let mut expected = all.clone();
        expected.sort_by(|a, b| b.size.cmp(&a.size));
        expected.truncate(n);
        assert_eq!(tracker.get_top_n(), expected);
    }
    Ok(())
}

// --- run() ---

#[test]
fn test_run_renders_analysis_text() -> TestResult {
    let temp = analysis_fixture()?;
    let config = Config {
        task: Task::Analyze {
            path: temp.path().to_path_buf(),
            options: AnalysisOptions::default(),
            by_directory: false,
        },
        output: OutputConfig::default(),
    };
    let mut buf = Vec::new();
    run(&config, &CancellationToken::new(), &mut buf)?;
    let text = String::from_utf8(buf)?;
    assert!(text.contains("Analyzing folder:"));
    assert!(text.contains("FOLDER ANALYSIS SUMMARY"));
    assert!(text.contains("File Count:       8"));
    assert!(text.contains("Directory Count:  3"));
    Ok(())
}

#[test]
fn test_run_cancelled() -> TestResult {
    let temp = search_fixture()?;
    let config = Config {
        task: Task::FindLargeFiles {
            path: temp.path().to_path_buf(),
            options: SearchOptions::default(),
        },
        output: OutputConfig::default(),
    };
    let token = CancellationToken::new();
    token.cancel();
    let mut buf = Vec::new();
    assert!(matches!(run(&config, &token, &mut buf), Err(Error::Interrupted)));
    Ok(())
}
