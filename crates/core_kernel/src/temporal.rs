//! Coverage period handling
//!
//! Covers run over calendar dates with no time-of-day component. The billed
//! length of a period is the day-number difference between its end and start
//! dates, so a period starting and ending on the same day has length zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar date range for a cover
///
/// The start date is inclusive; `day_count` follows the exclusive-length
/// convention (`end - start` in days). Claim window checks treat both
/// boundary dates as inside the period.
///
/// The constructor performs no ordering validation. Business rules about
/// inverted or oversized ranges live with the cover validator, which needs
/// to report each failure with its own reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverPeriod {
    /// First day of coverage (inclusive)
    pub start_date: NaiveDate,
    /// Last day of coverage
    pub end_date: NaiveDate,
}

impl CoverPeriod {
    /// Creates a new period
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Billed length in days: `end.day_number - start.day_number`
    ///
    /// Negative for inverted ranges; callers that iterate over the period
    /// treat that as an empty range.
    pub fn day_count(&self) -> i64 {
        self.end_date
            .signed_duration_since(self.start_date)
            .num_days()
    }

    /// Returns true if the given date falls within the period, inclusive
    /// at both ends
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if the period starts before the given date
    pub fn starts_before(&self, date: NaiveDate) -> bool {
        self.start_date < date
    }

    /// Returns true if the end date precedes the start date
    pub fn is_inverted(&self) -> bool {
        self.end_date < self.start_date
    }
}

impl fmt::Display for CoverPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_date, self.end_date)
    }
}
