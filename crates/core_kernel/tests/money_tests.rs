//! Money arithmetic tests

use core_kernel::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_zero_constant() {
    assert!(Money::ZERO.is_zero());
    assert_eq!(Money::ZERO.amount(), Decimal::ZERO);
}

#[test]
fn test_equality_ignores_trailing_zeroes() {
    assert_eq!(Money::new(dec!(41250)), Money::new(dec!(41250.00)));
}

#[test]
fn test_ordering() {
    assert!(Money::new(dec!(100000.01)) > Money::new(dec!(100000)));
    assert!(Money::new(dec!(99999.99)) < Money::new(dec!(100000)));
}

#[test]
fn test_round_to_cents() {
    let m = Money::new(dec!(1306.2575));
    assert_eq!(m.round_to_cents().amount(), dec!(1306.26));
}

#[test]
fn test_serde_round_trip() {
    let m = Money::new(dec!(56250.75));
    let json = serde_json::to_string(&m).unwrap();
    let back: Money = serde_json::from_str(&json).unwrap();
    assert_eq!(m, back);
}

#[test]
fn test_deserializes_from_bare_number() {
    let m: Money = serde_json::from_str("99000").unwrap();
    assert_eq!(m.amount(), dec!(99000));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn addition_is_commutative(a in -1_000_000i64..1_000_000i64, b in -1_000_000i64..1_000_000i64) {
            let ma = Money::new(Decimal::new(a, 2));
            let mb = Money::new(Decimal::new(b, 2));
            prop_assert_eq!(ma + mb, mb + ma);
        }

        #[test]
        fn subtraction_undoes_addition(a in -1_000_000i64..1_000_000i64, b in -1_000_000i64..1_000_000i64) {
            let ma = Money::new(Decimal::new(a, 2));
            let mb = Money::new(Decimal::new(b, 2));
            prop_assert_eq!((ma + mb) - mb, ma);
        }
    }
}
