// src/output/formatter.rs

//! Provides helper functions for formatting parts of the output.

use crate::constants::{REPORT_WIDTH, TIMESTAMP_FORMAT};
use byte_unit::{Byte, Unit, UnitType};
use chrono::{Local, TimeZone};
use std::path::Path;

/// Formats a byte count with two decimals and 1024-based units.
///
/// # Examples
/// ```
/// use storage_tools::output::formatter::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(1023), "1023 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1536), "1.50 KB");
/// assert_eq!(format_size(1_073_741_824), "1.00 GB");
/// ```
pub fn format_size(bytes: u64) -> String {
    format_size_with_precision(bytes, 2)
}

/// Formats a byte count with `decimals` decimal places. Plain bytes never
/// carry decimals and the largest unit used is PB.
pub fn format_size_with_precision(bytes: u64, decimals: usize) -> String {
    let byte = Byte::from_u64(bytes);
    let mut adjusted = byte.get_appropriate_unit(UnitType::Binary);
    let label = match adjusted.get_unit() {
        Unit::B => return format!("{} B", bytes),
        Unit::KiB => "KB",
        Unit::MiB => "MB",
        Unit::GiB => "GB",
        Unit::TiB => "TB",
        Unit::PiB => "PB",
        _ => {
            adjusted = byte.get_adjusted_unit(Unit::PiB);
            "PB"
        }
    };
    format!("{:.*} {}", decimals, adjusted.get_value(), label)
}

/// Formats seconds since the epoch as local time, e.g. `2024-01-15 09:30:00`.
pub fn format_timestamp(epoch_seconds: f64) -> String {
    let secs = epoch_seconds.floor();
    let nanos = ((epoch_seconds - secs) * 1e9) as u32;
    match Local.timestamp_opt(secs as i64, nanos).earliest() {
        Some(datetime) => datetime.format(TIMESTAMP_FORMAT).to_string(),
        None => "unknown".to_string(),
    }
}

/// Formats a path for display, with `/` separators on every platform.
pub fn format_path_for_display(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Formats a path relative to `root`, falling back to the full path when it
/// lies outside `root`.
pub fn format_relative_path(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => format_path_for_display(relative),
        Err(_) => format_path_for_display(path),
    }
}

/// A full-width rule made of `ch`.
pub(crate) fn rule(ch: char) -> String {
    ch.to_string().repeat(REPORT_WIDTH)
}

/// Formats an integer with `,` thousands separators.
pub(crate) fn with_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.00 GB");
        assert_eq!(format_size(1024u64.pow(4)), "1.00 TB");
        assert_eq!(format_size(1024u64.pow(5)), "1.00 PB");
    }

    #[test]
    fn test_format_size_caps_at_pb() {
        assert_eq!(format_size(1024u64.pow(6)), "1024.00 PB");
    }

    #[test]
    fn test_format_size_precision() {
        assert_eq!(format_size_with_precision(1536, 1), "1.5 KB");
        assert_eq!(format_size_with_precision(1536, 0), "2 KB");
        assert_eq!(format_size_with_precision(100, 3), "100 B");
    }

    #[test]
    fn test_relative_path() {
        let root = Path::new("/data");
        assert_eq!(format_relative_path(Path::new("/data/a/b.txt"), root), "a/b.txt");
        assert_eq!(format_relative_path(Path::new("/other/c.txt"), root), "/other/c.txt");
    }

    #[test]
    fn test_with_thousands() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(1000), "1,000");
        assert_eq!(with_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_timestamp_shape() {
        let formatted = format_timestamp(1_700_000_000.25);
        assert_eq!(formatted.len(), "2023-11-14 22:13:20".len());
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
    }
}
