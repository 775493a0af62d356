//! Date input helpers
//!
//! Formatting used by the date-picker form-filling steps: HTML date inputs
//! take `YYYY-MM-DD`, while step tables often carry compact `YYYYMMDD`
//! strings or day offsets relative to today.

use chrono::{Days, Local, NaiveDate};

use crate::{Error, Result};

/// Format a date for an HTML date input field
pub fn format_date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Convert a compact `YYYYMMDD` string to `YYYY-MM-DD`
pub fn convert_compact_date(date_string: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(date_string, "%Y%m%d")
        .map_err(|_| Error::internal(format!("Invalid YYYYMMDD date: {}", date_string)))?;
    Ok(format_date_input(parsed))
}

/// Today's date offset by `day_offset` days, formatted for a date input
pub fn relative_date(day_offset: i64) -> String {
    let today = Local::now().date_naive();
    let date = if day_offset >= 0 {
        today
            .checked_add_days(Days::new(day_offset as u64))
            .unwrap_or(today)
    } else {
        today
            .checked_sub_days(Days::new(day_offset.unsigned_abs()))
            .unwrap_or(today)
    };
    format_date_input(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_input() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date_input(date), "2024-03-07");
    }

    #[test]
    fn test_convert_compact_date() {
        assert_eq!(convert_compact_date("20240307").unwrap(), "2024-03-07");
        assert!(convert_compact_date("2024030").is_err());
        assert!(convert_compact_date("20241332").is_err());
    }

    #[test]
    fn test_relative_date_today() {
        let today = Local::now().date_naive();
        assert_eq!(relative_date(0), format_date_input(today));
    }
}
