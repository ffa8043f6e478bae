//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use picalc_core::PiValue;

/// Format a π digit string for display, truncating very long ones.
#[must_use]
pub fn format_result(value: &PiValue, verbose: bool) -> String {
    let s = value.to_digit_string();
    if !verbose && s.len() > 100 {
        format!(
            "{}...{} ({} digits)",
            &s[..50],
            &s[s.len() - 50..],
            value.digits()
        )
    } else {
        s
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write the full digit string to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, value: &PiValue) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{}", value.to_digit_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pi_value(digits: u64) -> PiValue {
        picalc_core::pi(digits).unwrap()
    }

    #[test]
    fn short_result_untruncated() {
        let value = pi_value(10);
        assert_eq!(format_result(&value, false), "3.141592653");
    }

    #[test]
    fn long_result_truncated_unless_verbose() {
        let value = pi_value(500);
        let display = format_result(&value, false);
        assert!(display.contains("..."));
        assert!(display.contains("(500 digits)"));
        assert!(display.starts_with("3.14159"));

        let full = format_result(&value, true);
        assert_eq!(full.len(), 501); // 500 digits plus the decimal point
    }

    #[test]
    fn duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
        assert!(format_duration(Duration::from_secs(3)).contains('s'));
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn thousand_separators() {
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(1_234), "1,234");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

}
