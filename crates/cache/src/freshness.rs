//! Age checks for cache entries
//!
//! Freshness is judged on local calendar dates, not elapsed time. With a
//! window of `days`, an entry is fresh when its modification date is on or
//! after `today - (days - 1)`. An entry written at 23:59 is therefore
//! already expired at 00:01 the next day when `days == 1`.

use chrono::{DateTime, Duration, Local, NaiveDate};
use std::time::SystemTime;

/// Earliest modification date still considered fresh
///
/// `days == 0` puts the cutoff at tomorrow, so nothing is fresh.
pub fn cutoff_date(today: NaiveDate, days: u32) -> NaiveDate {
    let offset = i64::from(days) - 1;
    today
        .checked_sub_signed(Duration::days(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// Local calendar date of a modification time
pub fn modified_date(modified: SystemTime) -> NaiveDate {
    DateTime::<Local>::from(modified).date_naive()
}

/// Whether an entry modified at `modified` is inside the window on `today`
pub fn is_fresh(modified: SystemTime, days: u32, today: NaiveDate) -> bool {
    modified_date(modified) >= cutoff_date(today, days)
}

/// Today's local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, TimeZone};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn local_time(day: NaiveDate, h: u32, m: u32) -> SystemTime {
        let naive = day.and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap());
        let local = Local.from_local_datetime(&naive).earliest().unwrap();
        SystemTime::from(local)
    }

    #[test]
    fn test_cutoff_for_common_windows() {
        let today = date(2024, 3, 10);
        assert_eq!(cutoff_date(today, 1), today);
        assert_eq!(cutoff_date(today, 2), date(2024, 3, 9));
        assert_eq!(cutoff_date(today, 10), date(2024, 3, 1));
        assert_eq!(cutoff_date(today, 0), date(2024, 3, 11));
    }

    #[test]
    fn test_cutoff_saturates_for_huge_windows() {
        assert_eq!(cutoff_date(date(2024, 3, 10), u32::MAX), NaiveDate::MIN);
    }

    #[test]
    fn test_written_today_is_fresh_for_one_day() {
        let today = date(2024, 3, 10);
        let written = local_time(today, 12, 0);
        assert!(is_fresh(written, 1, today));
        assert!(!is_fresh(written, 1, date(2024, 3, 11)));
        assert!(is_fresh(written, 2, date(2024, 3, 11)));
    }

    #[test]
    fn test_calendar_day_boundary() {
        let written = local_time(date(2024, 3, 10), 23, 59);
        assert!(!is_fresh(written, 1, date(2024, 3, 11)));
    }

    #[test]
    fn test_zero_day_window_never_fresh() {
        let today = date(2024, 3, 10);
        assert!(!is_fresh(local_time(today, 8, 30), 0, today));
    }

    #[test]
    fn test_five_days_old_expires_for_short_windows() {
        let today = date(2024, 3, 10);
        let written = local_time(date(2024, 3, 5), 9, 0);
        assert!(!is_fresh(written, 1, today));
        assert!(!is_fresh(written, 5, today));
        assert!(is_fresh(written, 6, today));
    }
}
