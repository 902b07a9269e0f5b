//! Shared utility functions for bike rental crates.

/// Date utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Parse a date string in "YYYYMMDD" format (compact format)
    pub fn parse_date_compact(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y%m%d")?)
    }

    /// Parse a date column value as written by the dataset exports.
    ///
    /// Accepts "YYYY-MM-DD", "YYYY-MM-DD HH:MM:SS" (time is dropped) and
    /// the compact "YYYYMMDD" form.
    pub fn parse_record_date(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if let Ok(date) = parse_date(s) {
            return Some(date);
        }
        if let Ok(date_time) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
            return Some(date_time.date());
        }
        parse_date_compact(s).ok()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_record_date_formats() {
            let expected = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
            assert_eq!(parse_record_date("2011-01-01"), Some(expected));
            assert_eq!(parse_record_date("2011-01-01 00:00:00"), Some(expected));
            assert_eq!(parse_record_date("20110101"), Some(expected));
            assert_eq!(parse_record_date(" 2011-01-01 "), Some(expected));
        }

        #[test]
        fn test_parse_record_date_rejects_garbage() {
            assert_eq!(parse_record_date("01/01/2011"), None);
            assert_eq!(parse_record_date("2011-02-30"), None);
            assert_eq!(parse_record_date(""), None);
        }
    }
}

/// Number formatting for dashboard metrics
pub mod numbers {
    /// Format a count with comma thousands separators, e.g. 1234567 -> "1,234,567"
    pub fn format_thousands(value: u64) -> String {
        let digits = value.to_string();
        let mut result = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                result.push(',');
            }
            result.push(c);
        }
        result
    }

    /// Format a percentage with one decimal place, e.g. 18.83 -> "18.8%"
    pub fn format_percent(value: f64) -> String {
        format!("{:.1}%", value)
    }

}
