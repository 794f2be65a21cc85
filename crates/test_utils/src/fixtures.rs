//! Pre-built test data
//!
//! Date fixtures are anchored to the running clock because cover validation
//! compares against the current date; everything else is fixed.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use core_kernel::{CoverId, CoverPeriod, Money};
use domain_cover::{compute_premium, Cover, CoverType};
use rust_decimal_macros::dec;

/// Dates positioned relative to the running clock
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The current UTC date
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// A start date comfortably in the future
    pub fn upcoming_start() -> NaiveDate {
        Self::today() + Duration::days(7)
    }

    /// A 90-day period starting at `upcoming_start`
    pub fn upcoming_period() -> CoverPeriod {
        let start = Self::upcoming_start();
        CoverPeriod::new(start, start + Duration::days(90))
    }

    /// Noon UTC on the given date, for claim timestamps
    pub fn noon(date: NaiveDate) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
    }
}

/// Monetary amounts around the interesting boundaries
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A damage cost well inside the ceiling
    pub fn modest_damage() -> Money {
        Money::new(dec!(25000))
    }

    /// Exactly the damage cost ceiling
    pub fn ceiling_damage() -> Money {
        Money::new(dec!(100000))
    }

    /// A damage cost past the ceiling
    pub fn excessive_damage() -> Money {
        Money::new(dec!(250000))
    }
}

/// A stored cover for claim tests, priced consistently
pub fn stored_cover(cover_type: CoverType, period: CoverPeriod) -> Cover {
    Cover {
        id: CoverId::new(),
        cover_type,
        period,
        premium: compute_premium(period, cover_type),
    }
}
