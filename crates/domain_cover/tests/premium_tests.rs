//! Premium rating tests
//!
//! Exercises the tier boundaries, the per-class rate table, and the 365-day
//! accrual cap, plus property tests for monotonicity.

use chrono::{Duration, NaiveDate};
use core_kernel::{CoverPeriod, Money};
use domain_cover::{compute_premium, CoverType};
use rust_decimal_macros::dec;

fn period_of(days: i64) -> CoverPeriod {
    let start = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
    CoverPeriod::new(start, start + Duration::days(days))
}

mod tier_tests {
    use super::*;

    #[test]
    fn test_zero_length_is_free_for_every_class() {
        for cover_type in CoverType::ALL {
            assert_eq!(
                compute_premium(period_of(0), cover_type),
                Money::ZERO,
                "{cover_type} should price a zero-length period at zero"
            );
        }
    }

    #[test]
    fn test_thirty_day_yacht_bills_full_rate() {
        assert_eq!(
            compute_premium(period_of(30), CoverType::Yacht),
            Money::new(dec!(30) * dec!(1250) * dec!(1.1))
        );
    }

    #[test]
    fn test_180_day_tanker_spans_two_tiers() {
        // 30 days full rate, then 150 days at the 2% discount
        let daily = dec!(1250) * dec!(1.5);
        let expected = dec!(30) * daily + dec!(150) * daily * dec!(0.98);
        assert_eq!(
            compute_premium(period_of(180), CoverType::Tanker),
            Money::new(expected)
        );
    }

    #[test]
    fn test_365_day_bulk_carrier_spans_three_tiers() {
        let daily = dec!(1250) * dec!(1.3);
        let expected =
            dec!(30) * daily + dec!(150) * daily * dec!(0.98) + dec!(185) * daily * dec!(0.97);
        assert_eq!(
            compute_premium(period_of(365), CoverType::BulkCarrier),
            Money::new(expected)
        );
    }

    #[test]
    fn test_365_day_yacht_uses_deeper_discounts() {
        let daily = dec!(1250) * dec!(1.1);
        let expected =
            dec!(30) * daily + dec!(150) * daily * dec!(0.95) + dec!(185) * daily * dec!(0.92);
        assert_eq!(
            compute_premium(period_of(365), CoverType::Yacht),
            Money::new(expected)
        );
    }

    #[test]
    fn test_day_31_is_already_discounted() {
        let daily = dec!(1250) * dec!(1.2);
        let expected = dec!(30) * daily + daily * dec!(0.98);
        assert_eq!(
            compute_premium(period_of(31), CoverType::PassengerShip),
            Money::new(expected)
        );
    }
}

mod cap_tests {
    use super::*;

    #[test]
    fn test_days_past_365_accrue_nothing() {
        for cover_type in CoverType::ALL {
            let capped = compute_premium(period_of(365), cover_type);
            assert_eq!(
                compute_premium(period_of(415), cover_type),
                capped,
                "a 415-day {cover_type} cover should bill as 365 days"
            );
            assert_eq!(compute_premium(period_of(366), cover_type), capped);
        }
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_cover_type() -> impl Strategy<Value = CoverType> {
        prop::sample::select(CoverType::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn premium_is_monotone_in_length(
            shorter in 0i64..500,
            extra in 0i64..120,
            cover_type in any_cover_type()
        ) {
            let small = compute_premium(period_of(shorter), cover_type);
            let large = compute_premium(period_of(shorter + extra), cover_type);
            prop_assert!(large >= small);
        }

        #[test]
        fn premium_is_positive_for_nonempty_periods(
            days in 1i64..500,
            cover_type in any_cover_type()
        ) {
            prop_assert!(compute_premium(period_of(days), cover_type).is_positive());
        }

        #[test]
        fn premium_never_exceeds_undiscounted_total(
            days in 0i64..500,
            cover_type in any_cover_type()
        ) {
            let billable = days.min(365);
            let ceiling = cover_type.rate_schedule().daily_rate()
                * rust_decimal::Decimal::from(billable);
            prop_assert!(compute_premium(period_of(days), cover_type).amount() <= ceiling);
        }
    }
}
