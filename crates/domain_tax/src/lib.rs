//! Tax Domain - Progressive income tax for the household economy
//!
//! Implements a Norwegian-style progressive tax model:
//! - A flat rate on ordinary income (alminnelig inntekt) after deductions
//! - A social security contribution (trygdeavgift) on gross income
//! - A five-bracket marginal step tax (trinnskatt) on gross income
//! - A standard deduction (minstefradrag) and a flat-rate deduction on
//!   loan interest paid
//!
//! All bracket edges, rates, and deduction parameters live in [`TaxRules`]
//! as one versioned rule set per tax year; the calculator never hard-codes
//! a policy constant.

pub mod breakdown;
pub mod calculator;
pub mod rules;

pub use breakdown::{BracketTax, TaxBreakdown};
pub use calculator::TaxCalculator;
pub use rules::{RulesError, TaxBracket, TaxRules};
