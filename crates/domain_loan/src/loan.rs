//! Loan records
//!
//! A `Loan` is any amortizing liability repaid in equal installments; a
//! `HousingLoan` additionally carries the capital (down payment) used to
//! derive the implied value of the financed home.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{month_start, Money, Rate};

/// An amortizing annuity loan
///
/// The schedule-defining parameters are fixed at construction: once
/// `term_years` and `terms_per_year` are set, the number of terms is
/// `term_years * terms_per_year` for the lifetime of the schedule. The start
/// date is normalized to the 1st of its month, since all scheduling is done
/// in whole calendar months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    description: String,
    amount: Money,
    interest_rate: Rate,
    term_years: u32,
    terms_per_year: u32,
    monthly_fee: Money,
    start_date: NaiveDate,
}

impl Loan {
    /// Creates a new loan with no periodic fee
    ///
    /// # Arguments
    ///
    /// * `description` - Display label; also part of the schedule cache key
    /// * `amount` - Principal (negative input is clamped to zero)
    /// * `interest_rate` - Nominal annual rate
    /// * `term_years` - Repayment period in years
    /// * `terms_per_year` - Payments per year (12 for monthly)
    /// * `start_date` - First payment month (day normalized to the 1st)
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        interest_rate: Rate,
        term_years: u32,
        terms_per_year: u32,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.clamp_non_negative(),
            interest_rate,
            term_years,
            terms_per_year,
            monthly_fee: Money::zero(),
            start_date: month_start(start_date),
        }
    }

    /// Adds a flat per-term fee
    pub fn with_monthly_fee(mut self, fee: Money) -> Self {
        self.monthly_fee = fee.clamp_non_negative();
        self
    }

    /// Display label
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Principal
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Nominal annual interest rate
    pub fn interest_rate(&self) -> Rate {
        self.interest_rate
    }

    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    pub fn terms_per_year(&self) -> u32 {
        self.terms_per_year
    }

    /// Flat fee charged on every term
    pub fn monthly_fee(&self) -> Money {
        self.monthly_fee
    }

    /// First payment month (always the 1st)
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Total number of payment terms
    pub fn number_of_terms(&self) -> u32 {
        self.term_years * self.terms_per_year
    }
}

/// A housing loan: a loan plus the equity capital paid up front
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousingLoan {
    loan: Loan,
    capital: Money,
}

impl HousingLoan {
    /// Creates a housing loan from a loan and the down-payment capital
    pub fn new(loan: Loan, capital: Money) -> Self {
        Self {
            loan,
            capital: capital.clamp_non_negative(),
        }
    }

    pub fn loan(&self) -> &Loan {
        &self.loan
    }

    /// Down-payment capital
    pub fn capital(&self) -> Money {
        self.capital
    }

    /// Home value implied at loan inception: principal plus capital
    pub fn implied_home_value(&self) -> Money {
        self.loan.amount() + self.capital
    }
}
