//! The derived annual tax breakdown

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

/// One step-tax bracket's contribution for a given income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketTax {
    pub lower: Money,
    pub upper: Option<Money>,
    pub rate: Rate,
    /// Tax owed within this bracket
    pub amount: Money,
}

/// One year's taxes, fully derived from incomes and loans
///
/// Has no identity of its own: recomputing from the same inputs yields the
/// same breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Gross taxable income
    pub total_income: Money,
    /// Tax-free income, tracked but never taxed or deducted; consumers add
    /// it back themselves when deriving monthly cash available
    pub tax_free_income: Money,
    /// Interest paid over the first twelve terms of every loan
    pub total_paid_interest: Money,
    /// Flat-rate deduction on the interest paid
    pub interest_deduction: Money,
    /// Standard deduction (minstefradrag)
    pub standard_deduction: Money,
    pub total_deductions: Money,
    /// Net taxable base (alminnelig inntekt)
    pub ordinary_income: Money,
    /// Flat tax on the net taxable base
    pub ordinary_income_tax: Money,
    /// Social security contribution (trygdeavgift) on gross income
    pub social_security: Money,
    /// Step tax (trinnskatt) per bracket
    pub bracket_taxes: Vec<BracketTax>,
    pub bracket_tax_total: Money,
    pub total_taxes: Money,
    /// Gross taxable income minus taxes (tax-free income excluded)
    pub net_annual_income: Money,
    pub net_monthly_income: Money,
    /// Taxes as a percentage of gross taxable income; 0 when income is 0
    pub effective_tax_rate: Decimal,
}
