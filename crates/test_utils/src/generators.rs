//! Property-based test generators
//!
//! Proptest strategies producing domain values that respect the records'
//! construction invariants.

use chrono::NaiveDate;
use core_kernel::{add_months, Money, Rate};
use domain_economy::Income;
use domain_loan::{HousingLoan, Loan};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::month;

/// Strategy for whole-unit monetary amounts
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64).prop_map(Money::from_major)
}

/// Strategy for annual interest rates between 0% and 15%
pub fn interest_rate_strategy() -> impl Strategy<Value = Rate> {
    (0i64..1500i64).prop_map(|basis_points| Rate::from_percentage(Decimal::new(basis_points, 2)))
}

/// Strategy for realistic payment frequencies
pub fn terms_per_year_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![Just(1u32), Just(2), Just(4), Just(12)]
}

/// Strategy for loan start months between 2015 and 2034
pub fn start_month_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u32..240u32).prop_map(|offset| add_months(month(2015, 1), offset))
}

/// Strategy for complete loans
pub fn loan_strategy() -> impl Strategy<Value = Loan> {
    (
        10_000i64..5_000_000i64,
        interest_rate_strategy(),
        1u32..31u32,
        terms_per_year_strategy(),
        0i64..100i64,
        start_month_strategy(),
    )
        .prop_map(|(amount, rate, years, terms, fee, start)| {
            Loan::new(
                "generated",
                Money::from_major(amount),
                rate,
                years,
                terms,
                start,
            )
            .with_monthly_fee(Money::from_major(fee))
        })
}

/// Strategy for housing loans with capital up to half the principal
pub fn housing_loan_strategy() -> impl Strategy<Value = HousingLoan> {
    (loan_strategy(), 0i64..2_000_000i64)
        .prop_map(|(loan, capital)| HousingLoan::new(loan, Money::from_major(capital)))
}

/// Strategy for income records, one in five tax-free
pub fn income_strategy() -> impl Strategy<Value = Income> {
    (0i64..2_000_000i64, 0u32..5u32).prop_map(|(amount, kind)| {
        if kind == 0 {
            Income::tax_free("generated benefit", Money::from_major(amount))
        } else {
            Income::new("generated salary", Money::from_major(amount))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use domain_loan::amortize;

    proptest! {
        #[test]
        fn generated_loans_are_well_formed(loan in loan_strategy()) {
            prop_assert!(!loan.amount().is_negative());
            prop_assert!(loan.number_of_terms() > 0);
            prop_assert_eq!(loan.start_date().day(), 1);
        }

        #[test]
        fn generated_loans_amortize_cleanly(loan in loan_strategy()) {
            let schedule = amortize(&loan);
            prop_assert_eq!(schedule.term_count() as u32, loan.number_of_terms());
        }

        #[test]
        fn generated_housing_loans_have_value(housing in housing_loan_strategy()) {
            prop_assert!(housing.implied_home_value() >= housing.loan().amount());
        }

        #[test]
        fn generated_money_is_non_negative(money in money_strategy()) {
            prop_assert!(!money.is_negative());
        }

        #[test]
        fn generated_incomes_clamp_like_the_records(income in income_strategy()) {
            prop_assert!(!income.annual_amount.is_negative());
            if income.tax_free {
                prop_assert!(income.source.contains("benefit"));
            }
        }
    }
}
