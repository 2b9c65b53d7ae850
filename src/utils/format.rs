//! Formatting utilities for dates and progress display values.

/// Format Unix timestamp as ISO date (YYYY-MM-DD).
///
/// Properly calculates year/month/day accounting for leap years.
pub fn format_date_iso(timestamp: u64) -> String {
    let days = timestamp / 86400;
    let mut year = 1970i64;
    let mut remaining_days = days as i64;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 1;
    for days_in_month in days_in_months.iter() {
        if remaining_days < *days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }

    let day = remaining_days + 1;
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Format Unix timestamp as UTC date and time (YYYY-MM-DD HH:MM:SS).
pub fn format_datetime(timestamp: u64) -> String {
    let hour = (timestamp % 86400) / 3600;
    let min = (timestamp % 3600) / 60;
    let sec = timestamp % 60;
    format!(
        "{} {:02}:{:02}:{:02}",
        format_date_iso(timestamp),
        hour,
        min,
        sec
    )
}

/// Check if a year is a leap year.
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Format a 1-based position for progress display (e.g., "2 / 3").
pub fn format_position(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}

/// Format a fraction as a CSS percentage width (e.g., "66.67%").
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction.clamp(0.0, 1.0) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_iso() {
        // Unix epoch
        assert_eq!(format_date_iso(0), "1970-01-01");
        // 2024-01-01 00:00:00 UTC = 1704067200
        assert_eq!(format_date_iso(1704067200), "2024-01-01");
        // 2024-02-29 (leap day) = 1709164800
        assert_eq!(format_date_iso(1709164800), "2024-02-29");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(0), "1970-01-01 00:00:00");
        // 2024-01-01 13:45:07 UTC
        assert_eq!(format_datetime(1704067200 + 13 * 3600 + 45 * 60 + 7), "2024-01-01 13:45:07");
    }

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(0, 3), "1 / 3");
        assert_eq!(format_position(2, 3), "3 / 3");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_percent(2.0 / 3.0), "66.67%");
        assert_eq!(format_percent(1.5), "100.00%");
    }
}
