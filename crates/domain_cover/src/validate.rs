//! Cover creation validation
//!
//! Checks run in order and short-circuit on the first failure, so a request
//! that is wrong in several ways reports the earliest reason.

use chrono::NaiveDate;

use core_kernel::CoverPeriod;

use crate::error::CoverError;
use crate::premium::MAX_COVERED_DAYS;

/// Validates a requested cover period against the current date
///
/// `today` is injected rather than read from the clock so the rules stay
/// pure; the service supplies the current UTC date.
pub fn validate_cover(period: CoverPeriod, today: NaiveDate) -> Result<(), CoverError> {
    if period.starts_before(today) {
        return Err(CoverError::StartDateInPast);
    }
    if period.is_inverted() {
        return Err(CoverError::EndBeforeStart);
    }
    if period.day_count() > MAX_COVERED_DAYS {
        return Err(CoverError::PeriodExceedsOneYear);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn test_accepts_period_starting_today() {
        let period = CoverPeriod::new(today(), today() + Duration::days(90));
        assert!(validate_cover(period, today()).is_ok());
    }

    #[test]
    fn test_accepts_full_year_period() {
        let period = CoverPeriod::new(today(), today() + Duration::days(365));
        assert!(validate_cover(period, today()).is_ok());
    }

    #[test]
    fn test_rejects_start_in_the_past() {
        let period = CoverPeriod::new(today() - Duration::days(1), today() + Duration::days(30));
        let err = validate_cover(period, today()).unwrap_err();
        assert!(matches!(err, CoverError::StartDateInPast));
        assert_eq!(err.to_string(), "start date is in the past");
    }

    #[test]
    fn test_rejects_inverted_range() {
        let period = CoverPeriod::new(today() + Duration::days(30), today());
        let err = validate_cover(period, today()).unwrap_err();
        assert!(matches!(err, CoverError::EndBeforeStart));
        assert_eq!(err.to_string(), "end date precedes start date");
    }

    #[test]
    fn test_rejects_period_longer_than_a_year() {
        let period = CoverPeriod::new(today(), today() + Duration::days(366));
        let err = validate_cover(period, today()).unwrap_err();
        assert!(matches!(err, CoverError::PeriodExceedsOneYear));
        assert_eq!(err.to_string(), "insurance period exceeds one year");
    }

    #[test]
    fn test_past_start_reported_before_inverted_range() {
        // Both rules are broken; the earlier check wins
        let period = CoverPeriod::new(today() - Duration::days(10), today() - Duration::days(20));
        assert!(matches!(
            validate_cover(period, today()),
            Err(CoverError::StartDateInPast)
        ));
    }
}
