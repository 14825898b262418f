//! Date formatting helpers, Indonesian locale conventions
//!
//! Wire dates are ISO strings ("2024-06-01" or "2024-06-01T10:00:00Z").
//! Anything unparseable is returned unchanged so broken rows still render.

use chrono::{Datelike, NaiveDate};

const MONTHS_SHORT_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Format a date for card date ranges
/// Example: "2024-06-01T10:00:00Z" -> "1 Jun"
pub fn format_date_short(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => format!(
            "{} {}",
            date.day(),
            MONTHS_SHORT_ID[date.month0() as usize]
        ),
        None => date_str.to_string(),
    }
}

/// Format a date the way id-ID renders short dates
/// Example: "2024-03-15" -> "15/3/2024"
pub fn format_date_numeric(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => format!("{}/{}/{}", date.day(), date.month(), date.year()),
        None => date_str.to_string(),
    }
}

fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_short() {
        assert_eq!(format_date_short("2024-06-01T10:00:00Z"), "1 Jun");
        assert_eq!(format_date_short("2024-05-20"), "20 Mei");
    }

    #[test]
    fn test_format_date_numeric() {
        assert_eq!(format_date_numeric("2024-03-15"), "15/3/2024");
        assert_eq!(format_date_numeric("2024-12-31T23:59:59Z"), "31/12/2024");
    }

    #[test]
    fn test_invalid_dates_pass_through() {
        assert_eq!(format_date_short("TBD"), "TBD");
        assert_eq!(format_date_numeric(""), "");
    }
}
