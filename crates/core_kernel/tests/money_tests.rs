//! Money and Rate Tests
//!
//! Covers the single-currency Money arithmetic, the clamping helpers the
//! calculators rely on, and Rate conversions.

use core_kernel::{Money, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ============================================================================
// MONEY TESTS
// ============================================================================

mod money_tests {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_places() {
        let m = Money::new(dec!(10.123456));
        assert_eq!(m.amount(), dec!(10.1235), "Amounts carry 4 decimal places");
    }

    #[test]
    fn test_default_is_zero() {
        assert!(Money::default().is_zero());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Money::from_major(10).is_positive());
        assert!(Money::from_major(-10).is_negative());
        assert!(!Money::zero().is_positive());
        assert!(!Money::zero().is_negative());
    }

    #[test]
    fn test_add_assign_and_sub_assign() {
        let mut balance = Money::from_major(100);
        balance += Money::from_major(25);
        balance -= Money::from_major(5);
        assert_eq!(balance, Money::from_major(120));
    }

    #[test]
    fn test_multiply_by_decimal() {
        let m = Money::from_major(200) * dec!(0.5);
        assert_eq!(m, Money::from_major(100));
    }

    #[test]
    fn test_divide_clamps_zero_divisor() {
        let m = Money::from_major(120);
        assert_eq!(m.divide(dec!(12)), Money::from_major(10));
        assert_eq!(
            m.divide(Decimal::ZERO),
            Money::zero(),
            "Zero divisor must yield zero, not an error"
        );
    }

    #[test]
    fn test_from_f64_coercion() {
        assert_eq!(Money::from_f64(100.25).amount(), dec!(100.25));
        assert!(Money::from_f64(f64::NAN).is_zero(), "NaN coerces to zero");
        assert!(
            Money::from_f64(f64::NEG_INFINITY).is_zero(),
            "Infinities coerce to zero"
        );
    }

    #[test]
    fn test_display_rounds_to_cents() {
        let m = Money::new(dec!(1234.5678));
        assert_eq!(m.to_string(), "1234.57 kr");
    }

    #[test]
    fn test_serde_round_trip() {
        let m = Money::new(dec!(99.5));
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}

// ============================================================================
// RATE TESTS
// ============================================================================

mod rate_tests {
    use super::*;

    #[test]
    fn test_percentage_round_trip() {
        let rate = Rate::from_percentage(dec!(3.6));
        assert_eq!(rate.as_percentage(), dec!(3.6));
        assert_eq!(rate.as_decimal(), dec!(0.036));
    }

    #[test]
    fn test_per_term_splits_annual_rate() {
        let rate = Rate::from_percentage(dec!(4.8));
        assert_eq!(rate.per_term(12), dec!(0.004));
        assert_eq!(rate.per_term(4), dec!(0.012));
    }

    #[test]
    fn test_per_term_zero_frequency_clamps() {
        let rate = Rate::from_percentage(dec!(4.8));
        assert_eq!(
            rate.per_term(0),
            Decimal::ZERO,
            "Zero payments per year must not divide by zero"
        );
    }

    #[test]
    fn test_growth_factor() {
        assert_eq!(Rate::from_percentage(dec!(2)).growth_factor(), dec!(1.02));
        assert_eq!(Rate::zero().growth_factor(), Decimal::ONE);
    }

    #[test]
    fn test_apply_to_money() {
        let levy = Rate::new(dec!(0.077));
        assert_eq!(
            levy.apply(&Money::from_major(100000)),
            Money::from_major(7700)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Rate::from_percentage(dec!(4.5)).to_string(), "4.5%");
    }
}
