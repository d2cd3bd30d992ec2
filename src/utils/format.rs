//! Format - Display Formatting for Table Cells

use chrono::{DateTime, Local, NaiveDate};

use crate::domain::form::format_date;

/// Price with two decimals, e.g. `$200000.00`
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Discount rate as a percentage, e.g. `10%` or `12.5%`
pub fn format_rate(rate: f64) -> String {
    format!("{rate}%")
}

/// Validity period, e.g. `2024-01-01 to 2024-12-31`
pub fn format_period(start: NaiveDate, end: NaiveDate, separator: &str) -> String {
    format!("{} {} {}", format_date(start), separator, format_date(end))
}

/// Format just the time portion
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Truncate a string to `max_chars` characters with an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars <= 3 {
        return s.chars().take(max_chars).collect();
    }
    let head: String = s.chars().take(max_chars - 3).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_and_rate() {
        assert_eq!(format_price(200000.0), "$200000.00");
        assert_eq!(format_price(99.999), "$100.00");
        assert_eq!(format_rate(10.0), "10%");
        assert_eq!(format_rate(12.5), "12.5%");
    }

    #[test]
    fn test_period() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("date");
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).expect("date");
        assert_eq!(format_period(start, end, "to"), "2024-01-01 to 2024-12-31");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Precision Insights Studio", 12), "Precision...");
        assert_eq!(truncate("精准洞察工作室", 5), "精准...");
    }
}
