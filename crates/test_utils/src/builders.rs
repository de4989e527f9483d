//! Test data builders
//!
//! Fluent builders with sensible defaults, so tests only spell out the
//! fields they care about.

use chrono::NaiveDate;
use core_kernel::{Money, Rate};
use domain_economy::{EconomyData, FixedExpense, House, Income, LivingCost};
use domain_loan::{HousingLoan, Loan};
use fake::faker::lorem::en::Word;
use fake::Fake;
use rust_decimal_macros::dec;

use crate::fixtures::month;

/// Builder for [`Loan`] test instances
pub struct LoanBuilder {
    description: String,
    amount: Money,
    interest_rate: Rate,
    term_years: u32,
    terms_per_year: u32,
    monthly_fee: Money,
    start_date: NaiveDate,
}

impl Default for LoanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanBuilder {
    /// A 1 000 000 loan at 5% over 20 years, monthly terms, no fee, with a
    /// generated description
    pub fn new() -> Self {
        let label: String = Word().fake();
        Self {
            description: format!("{label} loan"),
            amount: Money::from_major(1_000_000),
            interest_rate: Rate::from_percentage(dec!(5)),
            term_years: 20,
            terms_per_year: 12,
            monthly_fee: Money::zero(),
            start_date: month(2024, 1),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_interest_rate(mut self, rate: Rate) -> Self {
        self.interest_rate = rate;
        self
    }

    pub fn with_term_years(mut self, years: u32) -> Self {
        self.term_years = years;
        self
    }

    pub fn with_terms_per_year(mut self, terms: u32) -> Self {
        self.terms_per_year = terms;
        self
    }

    pub fn with_monthly_fee(mut self, fee: Money) -> Self {
        self.monthly_fee = fee;
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = date;
        self
    }

    pub fn build(self) -> Loan {
        Loan::new(
            self.description,
            self.amount,
            self.interest_rate,
            self.term_years,
            self.terms_per_year,
            self.start_date,
        )
        .with_monthly_fee(self.monthly_fee)
    }

    /// Builds a housing loan with the given capital on top
    pub fn build_housing(self, capital: Money) -> HousingLoan {
        HousingLoan::new(self.build(), capital)
    }
}

/// Builder for [`EconomyData`] test instances
#[derive(Default)]
pub struct EconomyBuilder {
    economy: EconomyData,
}

impl EconomyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_income(mut self, income: Income) -> Self {
        self.economy.incomes.push(income);
        self
    }

    pub fn with_salary(self, annual: Money) -> Self {
        self.with_income(Income::new("Salary", annual))
    }

    pub fn with_loan(mut self, loan: Loan) -> Self {
        self.economy.loans.push(loan);
        self
    }

    /// Adds a house and marks it active
    pub fn with_active_house(mut self, house: House) -> Self {
        let id = house.id;
        self.economy.houses.push(house);
        self.economy.set_active_house(id);
        self
    }

    pub fn with_fixed_expense(mut self, expense: FixedExpense) -> Self {
        self.economy.fixed_expenses.push(expense);
        self
    }

    pub fn with_living_cost(mut self, cost: LivingCost) -> Self {
        self.economy.living_costs.push(cost);
        self
    }

    pub fn with_personal_equity(mut self, equity: Money) -> Self {
        self.economy.personal_equity = equity;
        self
    }

    pub fn build(self) -> EconomyData {
        self.economy
    }
}
