// src/config/builder.rs

use super::{
    parsing::{compile_exclude_patterns, normalize_extensions, parse_date, parse_size},
    path_resolve::normalize_path,
    validation::validate_cli_options,
    AnalysisOptions, Config, OutputConfig, SearchOptions, Task, TraversalConfig,
};
use crate::cli::{AnalyzeArgs, Cli, Commands, FindLargeFilesArgs, TraversalArgs};
use crate::errors::ConfigError;

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        validate_cli_options(&cli.command)?;

        let config = match cli.command {
            Commands::Analyze(args) => build_analyze(args)?,
            Commands::FindLargeFiles(args) => build_find_large_files(args)?,
            Commands::FindDuplicates => Config {
                task: Task::FindDuplicates,
                output: OutputConfig::default(),
            },
            Commands::FindDuplicateFolders => Config {
                task: Task::FindDuplicateFolders,
                output: OutputConfig::default(),
            },
        };

        log::debug!("Built configuration: {:?}", config);
        Ok(config)
    }
}

fn build_traversal(args: &TraversalArgs) -> Result<TraversalConfig, ConfigError> {
    Ok(TraversalConfig {
        follow_symlinks: args.follow_symlinks,
        include_hidden: args.include_hidden,
        exclude_patterns: compile_exclude_patterns(&args.exclude, &args.exclude_regex)?,
        max_depth: args.depth,
    })
}

fn build_analyze(args: AnalyzeArgs) -> Result<Config, ConfigError> {
    let options = AnalysisOptions {
        traversal: build_traversal(&args.traversal)?,
        track_largest_n: args.top,
        sort_by: args.sort_by,
    };
    Ok(Config {
        task: Task::Analyze {
            path: normalize_path(&args.path),
            options,
            by_directory: args.by_directory,
        },
        output: OutputConfig {
            format: args.output.format,
            show_extensions: !args.no_extensions,
            show_largest: !args.no_largest,
            relative_paths: false,
        },
    })
}

fn build_find_large_files(args: FindLargeFilesArgs) -> Result<Config, ConfigError> {
    let min_size = match args.min_size.as_deref() {
        Some(size) => parse_size(size)?,
        None => 0,
    };
    let modified_since = args.modified_since.as_deref().map(parse_date).transpose()?;

    let options = SearchOptions {
        traversal: build_traversal(&args.traversal)?,
        top_n: args.top,
        min_size,
        extensions: normalize_extensions(&args.extensions),
        modified_since,
        group_by: args.group_by.unwrap_or_default(),
    };
    Ok(Config {
        task: Task::FindLargeFiles {
            path: normalize_path(&args.path),
            options,
        },
        output: OutputConfig {
            format: args.output.format,
            relative_paths: args.relative,
            ..OutputConfig::default()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GroupBy;
    use anyhow::Result;
    use clap::Parser;

    fn config_from(args: &[&str]) -> Result<Config> {
        let cli = Cli::try_parse_from(std::iter::once("storage-tools").chain(args.iter().copied()))?;
        Ok(Config::try_from(cli)?)
    }

    #[test]
    fn test_analyze_config_creation() -> Result<()> {
        let config = config_from(&["analyze", ".", "--depth", "2", "--exclude", "*.log"])?;
        let Task::Analyze {
            path,
            options,
            by_directory,
        } = config.task
        else {
            panic!("expected analyze task");
        };
        assert!(path.is_absolute());
        assert!(!by_directory);
        assert_eq!(options.traversal.max_depth, Some(2));
        assert_eq!(options.traversal.exclude_patterns.len(), 1);
        assert_eq!(options.track_largest_n, 10);
        assert!(config.output.show_extensions);
        assert!(config.output.show_largest);
        Ok(())
    }

    #[test]
    fn test_analyze_display_toggles() -> Result<()> {
        let config = config_from(&["analyze", "--no-extensions", "--no-largest", "-n", "3"])?;
        assert!(!config.output.show_extensions);
        assert!(!config.output.show_largest);
        let Task::Analyze { options, .. } = config.task else {
            panic!("expected analyze task");
        };
        assert_eq!(options.track_largest_n, 3);
        Ok(())
    }

    #[test]
    fn test_find_large_files_conversion() -> Result<()> {
        let config = config_from(&[
            "find-large-files",
            "--min-size",
            "1.5KB",
            "-e",
            ".PDF",
            "--modified-since",
            "2024-01-01",
            "--group-by",
            "dir",
            "--relative",
        ])?;
        assert!(config.output.relative_paths);
        let Task::FindLargeFiles { options, .. } = config.task else {
            panic!("expected find-large-files task");
        };
        assert_eq!(options.min_size, 1536);
        assert_eq!(options.extensions, Some(vec!["pdf".to_string()]));
        assert!(options.modified_since.is_some());
        assert_eq!(options.group_by, GroupBy::Directory);
        assert_eq!(options.top_n, 20);
        Ok(())
    }

    #[test]
    fn test_invalid_inputs_are_config_errors() {
        assert!(config_from(&["find-large-files", "--min-size", "10XB"]).is_err());
        assert!(config_from(&["find-large-files", "--modified-since", "yesterday"]).is_err());
        assert!(config_from(&["analyze", "--exclude-regex", "("]).is_err());
        assert!(config_from(&["find-large-files", "--top", "0"]).is_err());
    }

    #[test]
    fn test_stub_commands() -> Result<()> {
        let config = config_from(&["find-duplicates"])?;
        assert!(matches!(config.task, Task::FindDuplicates));
        let config = config_from(&["find-duplicate-folders"])?;
        assert!(matches!(config.task, Task::FindDuplicateFolders));
        Ok(())
    }
}
