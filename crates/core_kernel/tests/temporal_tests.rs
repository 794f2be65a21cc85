//! Coverage period tests

use chrono::NaiveDate;
use core_kernel::CoverPeriod;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_day_count_matches_day_number_difference() {
    // 2026-01-01 to 2027-01-01 is exactly 365 day numbers apart
    let period = CoverPeriod::new(date(2026, 1, 1), date(2027, 1, 1));
    assert_eq!(period.day_count(), 365);
}

#[test]
fn test_leap_year_day_count() {
    let period = CoverPeriod::new(date(2028, 1, 1), date(2029, 1, 1));
    assert_eq!(period.day_count(), 366);
}

#[test]
fn test_starts_before() {
    let period = CoverPeriod::new(date(2026, 8, 10), date(2026, 9, 10));
    assert!(period.starts_before(date(2026, 8, 11)));
    assert!(!period.starts_before(date(2026, 8, 10)));
    assert!(!period.starts_before(date(2026, 8, 9)));
}

#[test]
fn test_serde_uses_iso_dates() {
    let period = CoverPeriod::new(date(2026, 8, 10), date(2026, 9, 10));
    let json = serde_json::to_value(&period).unwrap();
    assert_eq!(json["start_date"], "2026-08-10");
    assert_eq!(json["end_date"], "2026-09-10");
}
