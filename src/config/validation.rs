// src/config/validation.rs

use super::OutputFormat;
use crate::cli::{Commands, OutputArgs};
use crate::errors::ConfigError;

/// Validates option values and combinations that clap cannot easily express.
pub(super) fn validate_cli_options(command: &Commands) -> Result<(), ConfigError> {
    match command {
        Commands::Analyze(args) => validate_format(&args.output),
        Commands::FindLargeFiles(args) => {
            if args.top == 0 {
                return Err(ConfigError::InvalidValue {
                    option: "--top".to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
            validate_format(&args.output)
        }
        Commands::FindDuplicates | Commands::FindDuplicateFolders => Ok(()),
    }
}

fn validate_format(output: &OutputArgs) -> Result<(), ConfigError> {
    if output.format == OutputFormat::Json && !cfg!(feature = "json") {
        return Err(ConfigError::InvalidValue {
            option: "--format".to_string(),
            reason: "JSON output requires the 'json' feature".to_string(),
        });
    }
    Ok(())
}
