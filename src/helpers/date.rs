//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Process from longest to shortest patterns within each category
    let replacements = [
        // Year
        ("YYYY", "%Y"),
        ("YY", "%y"),
        // Month (uppercase M)
        ("MMMM", "%B"), // Full month name
        ("MMM", "%b"),  // Abbreviated month name
        ("MM", "%m"),   // Two-digit month
        // Day of month (uppercase D)
        ("DDDD", "%j"), // Day of year
        ("DD", "%d"),   // Two-digit day
        // Hour 24h
        ("HH", "%H"),
        // Hour 12h
        ("hh", "%I"),
        // Minute (after MM has been handled)
        ("mm", "%M"),
        // Second
        ("ss", "%S"),
        // Day of week
        ("dddd", "%A"),
        ("ddd", "%a"),
        // Timezone
        ("ZZ", "%z"),
    ];

    let mut result = format.to_string();
    for (from, to) in replacements {
        result = result.replace(from, to);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_format_date() {
        let date = Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(&date, "YYYY-MM-DD"), "2024-01-15");
        assert_eq!(format_date(&date, "YYYY/MM/DD"), "2024/01/15");
        assert_eq!(format_date(&date, "MMMM DD, YYYY"), "January 15, 2024");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("HH:mm:ss"), "%H:%M:%S");
    }
}
