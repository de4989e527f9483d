//! The annual tax calculator
//!
//! Computes one year's progressive taxes from aggregate income records and
//! the household's combined loan set. Interest deductions come from each
//! loan's first twelve scheduled terms, read through the shared schedule
//! cache so repeated calculations reuse computed schedules.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, instrument};

use core_kernel::Money;
use domain_economy::{tax_free_total, taxable_total, Income};
use domain_loan::{Loan, ScheduleCache};

use crate::breakdown::{BracketTax, TaxBreakdown};
use crate::rules::TaxRules;

/// Calculator bound to one tax year's rules
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    rules: TaxRules,
}

impl TaxCalculator {
    pub fn new(rules: TaxRules) -> Self {
        Self { rules }
    }

    /// A calculator using the current default rule set
    pub fn with_current_rules() -> Self {
        Self::new(TaxRules::current().clone())
    }

    pub fn rules(&self) -> &TaxRules {
        &self.rules
    }

    /// Computes the annual tax breakdown
    ///
    /// `loans` is the combined set: the household's general loans plus the
    /// active housing loan, if any. The computation is total: zero income
    /// and empty loan sets produce a zero breakdown, never an error.
    #[instrument(skip_all, fields(incomes = incomes.len(), loans = loans.len(), year = self.rules.year))]
    pub fn calculate_annual(
        &self,
        incomes: &[Income],
        loans: &[&Loan],
        cache: &ScheduleCache,
    ) -> TaxBreakdown {
        let rules = &self.rules;

        let total_income = taxable_total(incomes);
        let tax_free_income = tax_free_total(incomes);

        let total_paid_interest: Money = loans
            .iter()
            .map(|loan| cache.get_or_compute(loan).first_year_interest())
            .sum();

        let interest_deduction = rules.interest_deduction_rate.apply(&total_paid_interest);
        let standard_deduction = rules
            .standard_deduction_rate
            .apply(&total_income)
            .min(rules.standard_deduction_cap);
        let total_deductions = standard_deduction + interest_deduction;

        let ordinary_income = (total_income - total_deductions).clamp_non_negative();
        let ordinary_income_tax = rules.ordinary_income_tax_rate.apply(&ordinary_income);

        // Trygdeavgift and trinnskatt are levied on gross income, not the
        // deduction-reduced base.
        let social_security = rules.social_security_rate.apply(&total_income);
        let bracket_taxes: Vec<BracketTax> = rules
            .brackets
            .iter()
            .map(|bracket| BracketTax {
                lower: bracket.lower,
                upper: bracket.upper,
                rate: bracket.rate,
                amount: bracket.marginal_tax(total_income),
            })
            .collect();
        let bracket_tax_total: Money = bracket_taxes.iter().map(|b| b.amount).sum();

        let total_taxes = ordinary_income_tax + social_security + bracket_tax_total;
        let net_annual_income = total_income - total_taxes;
        let net_monthly_income = net_annual_income.divide(dec!(12));

        let effective_tax_rate = if total_income.is_zero() {
            Decimal::ZERO
        } else {
            total_taxes.amount() / total_income.amount() * dec!(100)
        };

        debug!(%total_income, %total_taxes, %net_annual_income, "annual taxes computed");

        TaxBreakdown {
            total_income,
            tax_free_income,
            total_paid_interest,
            interest_deduction,
            standard_deduction,
            total_deductions,
            ordinary_income,
            ordinary_income_tax,
            social_security,
            bracket_taxes,
            bracket_tax_total,
            total_taxes,
            net_annual_income,
            net_monthly_income,
            effective_tax_rate,
        }
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::with_current_rules()
    }
}
