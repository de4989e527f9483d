//! Money and rate types with precise decimal arithmetic
//!
//! All amounts in the system are denominated in a single currency (NOK by
//! convention), so `Money` is a plain decimal wrapper with a total order.
//! Values are stored with 4 decimal places internally so that per-term
//! interest accrual does not lose precision before display rounding.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A monetary amount.
///
/// Arithmetic on `Money` is total: there is no currency to mismatch, and the
/// one division helper clamps a zero divisor to zero instead of failing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value, rounded to 4 decimal places
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: amount.round_dp(4),
        }
    }

    /// Creates Money from a whole-unit integer amount
    pub fn from_major(major_units: i64) -> Self {
        Self {
            amount: Decimal::new(major_units, 0),
        }
    }

    /// Creates Money from a float, coercing non-finite input to zero
    ///
    /// Upstream form and provider data arrives as loosely-typed numbers;
    /// NaN and infinities are treated as absent.
    pub fn from_f64(value: f64) -> Self {
        Self::new(Decimal::from_f64(value).unwrap_or_default())
    }

    /// The zero amount
    pub fn zero() -> Self {
        Self { amount: dec!(0) }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
        }
    }

    /// Clamps negative amounts to zero
    pub fn clamp_non_negative(&self) -> Self {
        if self.is_negative() {
            Self::zero()
        } else {
            *self
        }
    }

    /// Multiplies by a scalar (rate and growth-factor application)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor)
    }

    /// Divides by a scalar, clamping a zero divisor to a zero result
    pub fn divide(&self, divisor: Decimal) -> Self {
        if divisor.is_zero() {
            Self::zero()
        } else {
            Self::new(self.amount / divisor)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kr", self.amount.round_dp(2))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            amount: self.amount + other.amount,
        }
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.amount += other.amount;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            amount: self.amount - other.amount,
        }
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.amount -= other.amount;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            amount: -self.amount,
        }
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// A percentage rate (interest rate, growth rate, tax rate)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.045 for 4.5%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.045 for 4.5%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 4.5 for 4.5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// The zero rate
    pub fn zero() -> Self {
        Self { value: dec!(0) }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// The nominal per-term rate for a payment frequency
    ///
    /// A nominal annual rate divided evenly across the terms of one year;
    /// zero terms per year clamp to a zero per-term rate.
    pub fn per_term(&self, terms_per_year: u32) -> Decimal {
        if terms_per_year == 0 {
            Decimal::ZERO
        } else {
            self.value / Decimal::from(terms_per_year)
        }
    }

    /// The multiplicative factor for one period of growth at this rate
    pub fn growth_factor(&self) -> Decimal {
        Decimal::ONE + self.value
    }

    /// Applies this rate to a money amount
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50));
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_major(100);
        let b = Money::from_major(50);

        assert_eq!((a + b).amount(), dec!(150));
        assert_eq!((a - b).amount(), dec!(50));
        assert_eq!((-b).amount(), dec!(-50));
    }

    #[test]
    fn test_money_from_f64_coerces_non_finite() {
        assert!(Money::from_f64(f64::NAN).is_zero());
        assert!(Money::from_f64(f64::INFINITY).is_zero());
        assert_eq!(Money::from_f64(125.5).amount(), dec!(125.5));
    }

    #[test]
    fn test_money_divide_by_zero_clamps() {
        let m = Money::from_major(1200);
        assert_eq!(m.divide(dec!(12)).amount(), dec!(100));
        assert!(m.divide(Decimal::ZERO).is_zero());
    }

    #[test]
    fn test_money_clamp_non_negative() {
        assert_eq!(Money::from_major(-5).clamp_non_negative(), Money::zero());
        assert_eq!(
            Money::from_major(5).clamp_non_negative(),
            Money::from_major(5)
        );
    }

    #[test]
    fn test_money_ordering() {
        let small = Money::from_major(10);
        let large = Money::from_major(20);
        assert!(small < large);
        assert_eq!(small.min(large), small);
    }

    #[test]
    fn test_rate_from_percentage() {
        let rate = Rate::from_percentage(dec!(4.5));
        assert_eq!(rate.as_decimal(), dec!(0.045));
        assert_eq!(rate.as_percentage(), dec!(4.5));
    }

    #[test]
    fn test_rate_per_term() {
        let rate = Rate::from_percentage(dec!(3.6));
        assert_eq!(rate.per_term(12), dec!(0.003));
        assert_eq!(rate.per_term(0), Decimal::ZERO);
    }

    #[test]
    fn test_rate_application() {
        let rate = Rate::from_percentage(dec!(5.0));
        let amount = Money::from_major(1000);
        assert_eq!(rate.apply(&amount).amount(), dec!(50));
    }

    #[test]
    fn test_rate_growth_factor() {
        assert_eq!(Rate::from_percentage(dec!(3)).growth_factor(), dec!(1.03));
    }
}
