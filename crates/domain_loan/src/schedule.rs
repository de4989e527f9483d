//! Annuity amortization schedules
//!
//! Generates the full term-by-term repayment breakdown for a loan: constant
//! annuity payment split into interest and principal, per-term fee, running
//! balance, yearly rollups, and schedule-wide totals.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use core_kernel::{add_months, month_label, Money};

use crate::loan::Loan;

/// One payment term in an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Term index, starting at 1
    pub term: u32,
    /// Payment month (1st of the month)
    pub date: NaiveDate,
    /// Total paid this term: principal + interest + fee
    pub payment: Money,
    /// Interest accrued on the opening balance
    pub interest: Money,
    /// Principal repaid
    pub principal: Money,
    /// Flat per-term fee
    pub fee: Money,
    /// Remaining balance after this term
    pub balance: Money,
}

impl ScheduleRow {
    /// Display label for the payment month, e.g. "Jan 2024"
    pub fn label(&self) -> String {
        month_label(self.date)
    }
}

/// Rollup of all terms falling in one calendar year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearTotals {
    pub year: i32,
    pub interest: Money,
    pub principal: Money,
    pub fees: Money,
    pub paid: Money,
    /// Balance after the last term of this year
    pub end_balance: Money,
}

/// Schedule-wide totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTotals {
    pub interest: Money,
    pub principal: Money,
    pub fees: Money,
    pub paid: Money,
}

/// The full repayment schedule of a loan
///
/// Derived data: computed on demand from a `Loan` and never mutated. Cached
/// copies are shared behind `Arc` by the schedule cache, so any change to a
/// loan parameter produces a fresh schedule rather than an edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// The principal the schedule was generated from
    pub original_principal: Money,
    pub rows: Vec<ScheduleRow>,
    pub yearly: Vec<YearTotals>,
    pub totals: ScheduleTotals,
}

impl AmortizationSchedule {
    /// Number of terms in the schedule
    pub fn term_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first twelve terms (or fewer, for short schedules)
    ///
    /// A view used for first-year displays and the interest-deduction base;
    /// not a separate computation.
    pub fn first_year(&self) -> &[ScheduleRow] {
        &self.rows[..self.rows.len().min(12)]
    }

    /// Interest paid over the first twelve terms
    pub fn first_year_interest(&self) -> Money {
        self.first_year().iter().map(|row| row.interest).sum()
    }

    /// The row at a zero-based term offset, if the schedule reaches it
    ///
    /// Offsets past the final term return `None`: a finished loan no longer
    /// contributes payments.
    pub fn row_at(&self, offset: usize) -> Option<&ScheduleRow> {
        self.rows.get(offset)
    }

    /// Remaining balance after `terms` payments, clamped to the schedule
    ///
    /// Offset 0 is the balance before any payment (the full principal);
    /// offsets past the final term clamp to the last row.
    pub fn balance_after_terms(&self, terms: usize) -> Money {
        if terms == 0 || self.rows.is_empty() {
            return self.original_principal;
        }
        let index = terms.min(self.rows.len()) - 1;
        self.rows[index].balance
    }
}

/// Generates the amortization schedule for a loan
///
/// Standard fixed-annuity repayment: with per-term rate `r` over `n` terms,
/// the constant payment is `amount * r / (1 - (1+r)^-n)`. A zero (or
/// decimal-underflowing) rate degenerates to a straight-line principal-only
/// schedule instead of dividing by zero. The per-term principal is clamped to
/// the remaining balance so the final balance lands exactly on zero.
pub fn amortize(loan: &Loan) -> AmortizationSchedule {
    let number_of_terms = loan.number_of_terms();
    let amount = loan.amount();

    if number_of_terms == 0 {
        return AmortizationSchedule {
            original_principal: amount,
            rows: Vec::new(),
            yearly: Vec::new(),
            totals: ScheduleTotals::default(),
        };
    }

    let rate_per_term = loan.interest_rate().per_term(loan.terms_per_year());
    let payment = annuity_payment(amount, rate_per_term, number_of_terms);

    let mut rows = Vec::with_capacity(number_of_terms as usize);
    let mut yearly = Vec::new();
    let mut balance = amount;

    let mut year_interest = Money::zero();
    let mut year_principal = Money::zero();
    let mut year_fees = Money::zero();
    let mut year_paid = Money::zero();

    for term in 1..=number_of_terms {
        let date = add_months(loan.start_date(), term - 1);
        let interest = Money::new(balance.amount() * rate_per_term);
        let principal = (payment - interest).clamp_non_negative().min(balance);
        balance -= principal;
        let fee = loan.monthly_fee();
        let paid = principal + interest + fee;

        year_interest += interest;
        year_principal += principal;
        year_fees += fee;
        year_paid += paid;

        rows.push(ScheduleRow {
            term,
            date,
            payment: paid,
            interest,
            principal,
            fee,
            balance,
        });

        // A rollup closes when the next term falls in a new calendar year,
        // or at the final term, whichever comes first.
        let year_closes = term == number_of_terms
            || add_months(loan.start_date(), term).year() != date.year();
        if year_closes {
            yearly.push(YearTotals {
                year: date.year(),
                interest: year_interest,
                principal: year_principal,
                fees: year_fees,
                paid: year_paid,
                end_balance: balance,
            });
            year_interest = Money::zero();
            year_principal = Money::zero();
            year_fees = Money::zero();
            year_paid = Money::zero();
        }
    }

    let totals = ScheduleTotals {
        interest: yearly.iter().map(|y| y.interest).sum(),
        principal: yearly.iter().map(|y| y.principal).sum(),
        fees: yearly.iter().map(|y| y.fees).sum(),
        paid: yearly.iter().map(|y| y.paid).sum(),
    };

    AmortizationSchedule {
        original_principal: amount,
        rows,
        yearly,
        totals,
    }
}

/// Constant per-term annuity payment, rounded up to whole cents
///
/// Rounding up keeps the schedule from ending with a residual balance; the
/// final term's principal clamp absorbs the overshoot.
fn annuity_payment(amount: Money, rate_per_term: Decimal, number_of_terms: u32) -> Money {
    let raw = if rate_per_term > Decimal::ZERO {
        let growth = (Decimal::ONE + rate_per_term).powi(number_of_terms as i64);
        // growth can collapse to 1 when the rate underflows decimal precision
        if growth > Decimal::ONE {
            amount.amount() * rate_per_term * growth / (growth - Decimal::ONE)
        } else {
            amount.amount() / Decimal::from(number_of_terms)
        }
    } else {
        amount.amount() / Decimal::from(number_of_terms)
    };
    Money::new(raw.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::ToPositiveInfinity))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use core_kernel::Rate;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn arbitrary_loan() -> impl Strategy<Value = Loan> {
        (
            10_000i64..5_000_000i64,
            0u32..1500u32, // basis points, up to 15%
            1u32..31u32,
            prop_oneof![Just(1u32), Just(2), Just(4), Just(12)],
            0i64..100i64,
            0u32..240u32,
        )
            .prop_map(|(amount, rate_bp, years, tpy, fee, month_offset)| {
                let start = core_kernel::add_months(
                    NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
                    month_offset,
                );
                Loan::new(
                    "prop",
                    Money::from_major(amount),
                    Rate::from_percentage(Decimal::new(rate_bp as i64, 2)),
                    years,
                    tpy,
                    start,
                )
                .with_monthly_fee(Money::from_major(fee))
            })
    }

    proptest! {
        #[test]
        fn schedule_reconciles(loan in arbitrary_loan()) {
            let schedule = amortize(&loan);

            prop_assert_eq!(schedule.term_count() as u32, loan.number_of_terms());

            // Final balance lands exactly on zero
            let final_balance = schedule.rows.last().unwrap().balance;
            prop_assert!(final_balance.is_zero());

            // Principal telescopes to the original amount
            let principal: Money = schedule.rows.iter().map(|r| r.principal).sum();
            prop_assert_eq!(principal, loan.amount());

            // Yearly rollups reconcile with totals
            let yearly_paid: Money = schedule.yearly.iter().map(|y| y.paid).sum();
            prop_assert_eq!(yearly_paid, schedule.totals.paid);
        }

        #[test]
        fn balance_is_monotonically_non_increasing(loan in arbitrary_loan()) {
            let schedule = amortize(&loan);
            for pair in schedule.rows.windows(2) {
                prop_assert!(pair[1].balance <= pair[0].balance);
            }
        }

        #[test]
        fn payment_covers_interest(loan in arbitrary_loan()) {
            let schedule = amortize(&loan);
            for row in &schedule.rows {
                prop_assert!(row.interest >= Money::zero());
                prop_assert!(row.principal >= Money::zero());
                prop_assert!(row.payment + Money::new(dec!(0.0001)) >= row.interest + row.fee);
            }
        }
    }
}
