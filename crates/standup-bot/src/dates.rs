//! Calendar-day helpers for update queries.
//!
//! Record keys are `YYYY-MM-DD` strings, so every handler that talks about
//! "yesterday" or "N days ago" resolves the phrase to a concrete date here
//! and renders it back to the key format.

use chrono::{Days, Local, NaiveDate};

/// Days covered by a "last week" report, today included.
pub const WEEK_WINDOW: u64 = 8;

/// Today's date in the process-local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Render a date the way record keys store it.
pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The date `days` calendar days before `from`, if representable.
pub fn back(from: NaiveDate, days: u64) -> Option<NaiveDate> {
    from.checked_sub_days(Days::new(days))
}

/// The closed window of [`WEEK_WINDOW`] days ending at `end`, oldest first.
pub fn week_ending(end: NaiveDate) -> Vec<NaiveDate> {
    (0..WEEK_WINDOW)
        .rev()
        .filter_map(|offset| back(end, offset))
        .collect()
}

/// Parse a user-supplied `YYYY-MM-DD` token.
pub fn parse_iso(token: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(token, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_iso_zero_pads() {
        assert_eq!(iso(date(2024, 3, 5)), "2024-03-05");
    }

    #[test]
    fn test_back_crosses_month_boundary() {
        // 2024 is a leap year
        assert_eq!(back(date(2024, 3, 1), 1), Some(date(2024, 2, 29)));
        assert_eq!(back(date(2023, 3, 1), 1), Some(date(2023, 2, 28)));
    }

    #[test]
    fn test_week_ending_window() {
        let days = week_ending(date(2024, 3, 11));

        assert_eq!(days.len(), 8);
        assert_eq!(days.first(), Some(&date(2024, 3, 4)));
        assert_eq!(days.last(), Some(&date(2024, 3, 11)));
    }

    #[test]
    fn test_week_ending_is_oldest_first() {
        let days = week_ending(date(2024, 3, 11));
        let mut sorted = days.clone();
        sorted.sort();

        assert_eq!(days, sorted);
    }

    #[test]
    fn test_parse_iso_accepts_record_keys() {
        assert_eq!(parse_iso("2024-03-11"), Some(date(2024, 3, 11)));
    }

    #[test]
    fn test_parse_iso_normalizes_unpadded_input() {
        // Unpadded input resolves to the same calendar day, so rendering
        // it back yields the canonical record key
        let parsed = parse_iso("2024-3-5").unwrap();
        assert_eq!(iso(parsed), "2024-03-05");
    }

    #[test]
    fn test_parse_iso_rejects_garbage() {
        assert_eq!(parse_iso("2024-13-40"), None);
        assert_eq!(parse_iso("yesterday"), None);
        assert_eq!(parse_iso(""), None);
    }
}
