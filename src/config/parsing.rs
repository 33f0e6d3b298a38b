// src/config/parsing.rs

use super::ExcludePattern;
use crate::errors::ConfigError;
use byte_unit::{Byte, Unit};
use chrono::{Local, NaiveDate, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;

/// A decimal number followed by an alphabetic unit, e.g. `1.5 MB`.
static SIZE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([\d.]+)\s*([A-Z]+)$").unwrap());

/// Parses a human-readable size such as `"10MB"`, `"1.5 GB"` or `"100"` into bytes.
///
/// Units are 1024-based (`KB` = 1024, `MB` = 1024², … up to `PB`) and
/// case-insensitive. A bare integer is a byte count. Fractional results are
/// truncated.
///
/// # Examples
///
/// ```
/// use storage_tools::config::parse_size;
///
/// assert_eq!(parse_size("100").unwrap(), 100);
/// assert_eq!(parse_size("1kb").unwrap(), 1024);
/// assert_eq!(parse_size("1.5MB").unwrap(), 1_572_864);
/// assert!(parse_size("100XB").is_err());
/// ```
pub fn parse_size(input: &str) -> Result<u64, ConfigError> {
    let normalized = input.trim().to_uppercase();

    if !normalized.is_empty() && normalized.bytes().all(|b| b.is_ascii_digit()) {
        return normalized
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber(normalized.clone()));
    }

    let captures = SIZE_RE
        .captures(&normalized)
        .ok_or_else(|| ConfigError::InvalidSizeFormat(normalized.clone()))?;
    let number_str = &captures[1];
    let unit_str = &captures[2];

    let unit = binary_unit(unit_str).ok_or_else(|| ConfigError::UnknownUnit {
        unit: unit_str.to_string(),
    })?;
    let number: f64 = number_str
        .parse()
        .map_err(|_| ConfigError::InvalidNumber(number_str.to_string()))?;

    let multiplier = Byte::from_u64_with_unit(1, unit)
        .map(|b| b.as_u64())
        .ok_or_else(|| ConfigError::InvalidSizeFormat(normalized.clone()))?;

    Ok((number * multiplier as f64) as u64)
}

/// Maps the accepted unit suffixes onto byte-unit's binary units.
fn binary_unit(suffix: &str) -> Option<Unit> {
    match suffix {
        "B" => Some(Unit::B),
        "KB" => Some(Unit::KiB),
        "MB" => Some(Unit::MiB),
        "GB" => Some(Unit::GiB),
        "TB" => Some(Unit::TiB),
        "PB" => Some(Unit::PiB),
        _ => None,
    }
}

/// Parses a `YYYY-MM-DD` date into seconds since the Unix epoch at local midnight.
pub fn parse_date(input: &str) -> Result<f64, ConfigError> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ConfigError::InvalidDate(input.to_string()))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| ConfigError::InvalidDate(input.to_string()))?;
    let local = Local
        .from_local_datetime(&midnight)
        .earliest()
        .ok_or_else(|| ConfigError::InvalidDate(input.to_string()))?;
    Ok(local.timestamp() as f64)
}

/// Compiles `--exclude` globs and `--exclude-regex` expressions into one list.
/// Globs come first, in the order given.
pub(super) fn compile_exclude_patterns(
    globs: &[String],
    regexes: &[String],
) -> Result<Vec<ExcludePattern>, ConfigError> {
    let mut patterns = Vec::with_capacity(globs.len() + regexes.len());
    for glob in globs {
        let compiled = ExcludePattern::glob(glob).map_err(|e| ConfigError::InvalidPattern {
            kind: "glob",
            pattern: glob.clone(),
            reason: e.to_string(),
        })?;
        patterns.push(compiled);
    }
    for re in regexes {
        let compiled = ExcludePattern::regex(re).map_err(|e| ConfigError::InvalidPattern {
            kind: "regex",
            pattern: re.clone(),
            reason: e.to_string(),
        })?;
        patterns.push(compiled);
    }
    Ok(patterns)
}

/// Normalizes extensions to lowercase without a leading dot. An empty list means "no filter".
pub(super) fn normalize_extensions(exts: &[String]) -> Option<Vec<String>> {
    if exts.is_empty() {
        return None;
    }
    Some(
        exts.iter()
            .map(|s| s.trim_start_matches('.').to_lowercase())
            .collect(),
    )
}
