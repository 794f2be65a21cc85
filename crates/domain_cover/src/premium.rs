//! Premium rating engine
//!
//! Pricing is a per-day accumulation over the cover period with a
//! time-decaying discount: the first 30 days bill at the full daily rate,
//! days 30..180 at a mid-tier discount, and days 180..365 at a deeper
//! discount. Days past 365 contribute nothing, so a 415-day cover bills the
//! same as a 365-day one.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{CoverPeriod, Money};

use crate::cover::CoverType;

/// Daily rate before the vessel-class multiplier is applied
pub const BASE_DAILY_RATE: Decimal = dec!(1250);

/// Days past this index never accrue premium
pub const MAX_COVERED_DAYS: i64 = 365;

/// First day index billed at the mid-tier discounted rate
const MID_TIER_START: i64 = 30;

/// First day index billed at the late-tier discounted rate
const LATE_TIER_START: i64 = 180;

/// Per-class pricing inputs
///
/// One row of the vessel-class rate table: the base-rate multiplier plus the
/// discount applied in each of the two later tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateSchedule {
    multiplier: Decimal,
    mid_tier_discount: Decimal,
    late_tier_discount: Decimal,
}

impl RateSchedule {
    pub fn new(multiplier: Decimal, mid_tier_discount: Decimal, late_tier_discount: Decimal) -> Self {
        Self {
            multiplier,
            mid_tier_discount,
            late_tier_discount,
        }
    }

    /// Full daily rate for days 0..30
    pub fn daily_rate(&self) -> Decimal {
        BASE_DAILY_RATE * self.multiplier
    }

    /// Discounted daily rate for days 30..180
    pub fn mid_tier_rate(&self) -> Decimal {
        self.daily_rate() * (Decimal::ONE - self.mid_tier_discount)
    }

    /// Discounted daily rate for days 180..365
    pub fn late_tier_rate(&self) -> Decimal {
        self.daily_rate() * (Decimal::ONE - self.late_tier_discount)
    }
}

/// Prices a cover period for the given vessel class
///
/// Pure and total: there is no error path. Callers validate the period
/// separately; an inverted or zero-length range simply accrues nothing.
/// Safe for concurrent use, no shared state.
pub fn compute_premium(period: CoverPeriod, cover_type: CoverType) -> Money {
    let schedule = cover_type.rate_schedule();
    let length = period.day_count();

    let mut total = Decimal::ZERO;
    let mut day = 0i64;
    while day < length && day < MAX_COVERED_DAYS {
        total += if day < MID_TIER_START {
            schedule.daily_rate()
        } else if day < LATE_TIER_START {
            schedule.mid_tier_rate()
        } else {
            schedule.late_tier_rate()
        };
        day += 1;
    }

    Money::new(total)
}
