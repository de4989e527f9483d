//! Monthly payment-plan projection
//!
//! Simulates the household's cash flow month by month over a multi-year
//! horizon: net income after recomputed taxes, fixed and living costs, and
//! every loan's scheduled payment for that month.

use chrono::{Datelike, NaiveDate};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use core_kernel::{add_months, month_label, month_start, months_between, Money, Rate};
use domain_economy::{tax_free_total, taxable_total, EconomyData, Income};
use domain_loan::ScheduleCache;
use domain_tax::TaxCalculator;

/// Projection horizon used when the caller does not pick one
pub const DEFAULT_HORIZON_YEARS: u32 = 30;

/// Options for a payment-plan projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOptions {
    /// Annual salary growth applied at each raise cycle
    pub salary_growth: Rate,
    /// First simulated month (normalized to the 1st)
    pub start_date: NaiveDate,
    /// Horizon in years
    pub years: u32,
}

impl PlanOptions {
    pub fn new(salary_growth: Rate, start_date: NaiveDate) -> Self {
        Self {
            salary_growth,
            start_date: month_start(start_date),
            years: DEFAULT_HORIZON_YEARS,
        }
    }

    pub fn with_horizon(mut self, years: u32) -> Self {
        self.years = years;
        self
    }
}

/// One simulated month of household cash flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    pub date: NaiveDate,
    /// Net monthly income: taxed salary plus tax-free income / 12
    pub income: Money,
    /// Fixed expenses, living costs, and loan payments
    pub expenses: Money,
    /// Income minus expenses
    pub balance: Money,
    /// Interest paid across all loans this month
    pub interest: Money,
    /// Principal paid across all loans this month
    pub principal: Money,
    /// Balance with the housing loan's principal added back: the cash
    /// position before counting equity-building payments as spent
    pub balance_plus_principal: Money,
}

impl MonthlyRow {
    /// Display label for the simulated month, e.g. "Aug 2025"
    pub fn label(&self) -> String {
        month_label(self.date)
    }
}

/// Projects the household's monthly cash flow
///
/// Taxable income follows an annual raise cycle: it is multiplied by the
/// salary-growth factor whenever the simulated month is August, except on
/// the very first iteration. Tax-free income never grows. Taxes are
/// recomputed each month from a synthetic single income record and the
/// combined loan set, through the shared schedule cache.
///
/// A loan contributes its scheduled payment only for months it is actually
/// running: months before its start date or past its final term contribute
/// zero.
#[instrument(skip_all, fields(years = options.years, loans = economy.all_loans().len()))]
pub fn generate_payment_plan(
    economy: &EconomyData,
    calculator: &TaxCalculator,
    cache: &ScheduleCache,
    options: &PlanOptions,
) -> Vec<MonthlyRow> {
    let loans = economy.all_loans();
    let primary_loan = economy.active_housing_loan().map(|housing| housing.loan());

    let mut annual_taxable = taxable_total(&economy.incomes);
    let annual_tax_free = tax_free_total(&economy.incomes);
    let fixed_monthly = economy.monthly_fixed_expenses() + economy.monthly_living_costs();
    let growth_factor = options.salary_growth.growth_factor();

    let months = options.years * 12;
    let mut rows = Vec::with_capacity(months as usize);

    for iteration in 0..months {
        let month = add_months(options.start_date, iteration);

        // Raise cycle: August, but never the first simulated month
        if month.month() == 8 && iteration != 0 {
            annual_taxable = annual_taxable.multiply(growth_factor);
        }

        let synthetic = [Income::new("Projected salary", annual_taxable)];
        let breakdown = calculator.calculate_annual(&synthetic, &loans, cache);
        let income = breakdown.net_monthly_income + annual_tax_free.divide(dec!(12));

        let mut interest = Money::zero();
        let mut principal = Money::zero();
        let mut loan_payments = Money::zero();
        let mut primary_principal = Money::zero();

        for loan in &loans {
            let offset = months_between(loan.start_date(), month);
            if offset < 0 {
                continue;
            }
            let schedule = cache.get_or_compute(loan);
            if let Some(row) = schedule.row_at(offset as usize) {
                interest += row.interest;
                principal += row.principal;
                loan_payments += row.payment;
                if Some(*loan) == primary_loan {
                    primary_principal = row.principal;
                }
            }
        }

        let expenses = fixed_monthly + loan_payments;
        let balance = income - expenses;

        rows.push(MonthlyRow {
            date: month,
            income,
            expenses,
            balance,
            interest,
            principal,
            balance_plus_principal: balance + primary_principal,
        });
    }

    debug!(rows = rows.len(), "payment plan generated");
    rows
}
