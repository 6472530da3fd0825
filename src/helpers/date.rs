//! Date helpers for the MM/DD/YYYY content format

use chrono::NaiveDate;
use serde::Serializer;

/// Front-matter date format
pub const FORMAT: &str = "%m/%d/%Y";

/// Parse a front-matter date string
pub fn parse(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), FORMAT).ok()
}

/// Format a date back into the front-matter representation
pub fn format(date: &NaiveDate) -> String {
    date.format(FORMAT).to_string()
}

/// Format date in full format (like "January 1, 2024")
pub fn full_date(date: &NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Short month-year form ("Oct 2024") for work history rows
pub fn month_year(date: &NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Serde hook so JSON output carries the same MM/DD/YYYY text as the
/// source files
pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse("10/11/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 10, 11).unwrap());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse(" 01/02/2023 ").is_some());
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(parse("2024-10-11").is_none());
        assert!(parse("10-11-2024").is_none());
        assert!(parse("Present").is_none());
        assert!(parse("13/01/2024").is_none());
    }

    #[test]
    fn test_format_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let text = format(&date);
        assert_eq!(text, "03/05/2024");
        assert_eq!(parse(&text), Some(date));
    }

    #[test]
    fn test_full_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(full_date(&date), "January 15, 2024");
    }

    #[test]
    fn test_month_year() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        assert_eq!(month_year(&date), "Oct 2024");
    }
}
