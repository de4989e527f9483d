//! Pre-built test data
//!
//! Hand-checked records used across the test suites. The reference loan and
//! income set match the figures the tax tests verify by hand, so fixtures
//! and assertions stay in sync.

use chrono::NaiveDate;
use core_kernel::{Money, Rate};
use domain_economy::{EconomyData, ExpenseCategory, FixedExpense, House, Income, LivingCost};
use domain_loan::{HousingLoan, Loan};
use rust_decimal_macros::dec;

/// First of a month, panicking on invalid input (test-only convenience)
pub fn month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("valid test date")
}

/// The reference loan: 320 000 at 3.6% over 10 years, monthly terms with a
/// 25 kr fee, starting January 2024
pub fn reference_loan() -> Loan {
    Loan::new(
        "Mortgage",
        Money::from_major(320_000),
        Rate::from_percentage(dec!(3.6)),
        10,
        12,
        month(2024, 1),
    )
    .with_monthly_fee(Money::from_major(25))
}

/// The reference income set: 620 000 + 35 000 taxable, 24 000 tax-free
pub fn reference_incomes() -> Vec<Income> {
    vec![
        Income::new("Salary", Money::from_major(620_000)),
        Income::new("Side job", Money::from_major(35_000)),
        Income::tax_free("Child benefit", Money::from_major(24_000)),
    ]
}

/// A 300 000 housing loan with 100 000 capital (implied home value 400 000)
pub fn reference_housing_loan() -> HousingLoan {
    HousingLoan::new(
        Loan::new(
            "Home mortgage",
            Money::from_major(300_000),
            Rate::from_percentage(dec!(3.5)),
            10,
            12,
            month(2024, 1),
        ),
        Money::from_major(100_000),
    )
}

/// A populated household economy with the reference incomes, one car loan,
/// fixed expenses, living costs, and an active house
pub fn sample_economy() -> EconomyData {
    let mut economy = EconomyData::new();
    economy.incomes = reference_incomes();
    economy.loans = vec![Loan::new(
        "Car",
        Money::from_major(250_000),
        Rate::from_percentage(dec!(6.5)),
        5,
        12,
        month(2024, 3),
    )];
    economy.fixed_expenses = vec![
        FixedExpense::new(
            "Electricity",
            Money::from_major(1800),
            ExpenseCategory::Housing,
        ),
        FixedExpense::new(
            "Insurance",
            Money::from_major(900),
            ExpenseCategory::Personal,
        ),
    ];
    economy.living_costs = vec![LivingCost::new("Food and drink", Money::from_major(7200))];
    economy.personal_equity = Money::from_major(150_000);
    economy.houses = vec![House::new("Apartment", reference_housing_loan())];
    let active = economy.houses[0].id;
    economy.set_active_house(active);
    economy
}
