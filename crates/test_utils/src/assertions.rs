//! Custom test assertions
//!
//! Domain-aware assertion helpers with more useful failure messages than
//! bare equality checks.

use core_kernel::Money;
use domain_loan::{AmortizationSchedule, Loan};
use rust_decimal::Decimal;

/// Asserts that two Money values differ by no more than a tolerance
pub fn assert_money_approx_eq(actual: Money, expected: Money, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff.amount() <= tolerance,
        "Money values differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: Money) {
    assert!(money.is_zero(), "Expected zero, got {}", money);
}

/// Asserts that two Decimal values differ by no more than a tolerance
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts every reconciliation invariant of an amortization schedule
///
/// - The row count matches the loan's term count
/// - The final balance is exactly zero (for non-empty schedules)
/// - Principal across all rows telescopes to the loan amount
/// - Yearly rollups sum to the schedule totals
pub fn assert_schedule_reconciles(schedule: &AmortizationSchedule, loan: &Loan) {
    assert_eq!(
        schedule.term_count() as u32,
        loan.number_of_terms(),
        "Row count does not match the loan's term count"
    );

    if let Some(last) = schedule.rows.last() {
        assert!(
            last.balance.is_zero(),
            "Final balance is {} instead of zero",
            last.balance
        );
    }

    let principal: Money = schedule.rows.iter().map(|r| r.principal).sum();
    assert_eq!(
        principal,
        loan.amount(),
        "Principal paid does not telescope to the loan amount"
    );

    let yearly_interest: Money = schedule.yearly.iter().map(|y| y.interest).sum();
    let yearly_principal: Money = schedule.yearly.iter().map(|y| y.principal).sum();
    let yearly_fees: Money = schedule.yearly.iter().map(|y| y.fees).sum();
    let yearly_paid: Money = schedule.yearly.iter().map(|y| y.paid).sum();
    assert_eq!(yearly_interest, schedule.totals.interest, "Yearly interest mismatch");
    assert_eq!(yearly_principal, schedule.totals.principal, "Yearly principal mismatch");
    assert_eq!(yearly_fees, schedule.totals.fees, "Yearly fees mismatch");
    assert_eq!(yearly_paid, schedule.totals.paid, "Yearly paid mismatch");
}
