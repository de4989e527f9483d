//! Income records

use core_kernel::Money;
use serde::{Deserialize, Serialize};

/// One annual income stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    /// Source label (employer, benefit, rental, ...)
    pub source: String,
    /// Gross annual amount
    pub annual_amount: Money,
    /// Tax-free income is tracked separately: never taxed, never deducted
    pub tax_free: bool,
}

impl Income {
    /// Creates a taxable income
    pub fn new(source: impl Into<String>, annual_amount: Money) -> Self {
        Self {
            source: source.into(),
            annual_amount: annual_amount.clamp_non_negative(),
            tax_free: false,
        }
    }

    /// Creates a tax-free income
    pub fn tax_free(source: impl Into<String>, annual_amount: Money) -> Self {
        Self {
            source: source.into(),
            annual_amount: annual_amount.clamp_non_negative(),
            tax_free: true,
        }
    }
}

/// Sum of taxable annual amounts
pub fn taxable_total(incomes: &[Income]) -> Money {
    incomes
        .iter()
        .filter(|i| !i.tax_free)
        .map(|i| i.annual_amount)
        .sum()
}

/// Sum of tax-free annual amounts
pub fn tax_free_total(incomes: &[Income]) -> Money {
    incomes
        .iter()
        .filter(|i| i.tax_free)
        .map(|i| i.annual_amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_split_by_flag() {
        let incomes = vec![
            Income::new("Salary", Money::from_major(620_000)),
            Income::new("Side job", Money::from_major(35_000)),
            Income::tax_free("Child benefit", Money::from_major(24_000)),
        ];
        assert_eq!(taxable_total(&incomes), Money::from_major(655_000));
        assert_eq!(tax_free_total(&incomes), Money::from_major(24_000));
    }

    #[test]
    fn test_negative_amount_clamps() {
        let income = Income::new("Broken import", Money::from_major(-100));
        assert!(income.annual_amount.is_zero());
    }

    #[test]
    fn test_empty_slice_sums_to_zero() {
        assert!(taxable_total(&[]).is_zero());
        assert!(tax_free_total(&[]).is_zero());
    }
}
