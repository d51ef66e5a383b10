use chrono::{Datelike, Days, NaiveDate};

/// Monday of the ISO week containing `date`
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

/// Whether `date` falls in the same Monday-Sunday week as `today`
pub fn is_current_week(date: NaiveDate, today: NaiveDate) -> bool {
    let start = start_of_week(today);
    let end = add_days(start, 6);
    date >= start && date <= end
}

/// Parse an ISO `YYYY-MM-DD` form value
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_start_of_week_is_monday() {
        // 2024-03-10 is a Sunday
        assert_eq!(start_of_week(date(2024, 3, 10)), date(2024, 3, 4));
        assert_eq!(start_of_week(date(2024, 3, 4)), date(2024, 3, 4));
    }

    #[test]
    fn test_is_current_week_bounds() {
        let today = date(2024, 3, 6);
        assert!(is_current_week(date(2024, 3, 4), today));
        assert!(is_current_week(date(2024, 3, 10), today));
        assert!(!is_current_week(date(2024, 3, 11), today));
        assert!(!is_current_week(date(2024, 3, 3), today));
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-03-10"), Some(date(2024, 3, 10)));
        assert_eq!(parse_iso_date("10/03/2024"), None);
        assert_eq!(parse_iso_date(""), None);
    }
}
