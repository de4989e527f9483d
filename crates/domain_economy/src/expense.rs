//! Fixed expense and living cost records

use core_kernel::Money;
use serde::{Deserialize, Serialize};

use crate::ports::{ListingSnapshot, ReferenceBudget};

/// Category of a fixed expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Tied to the home: utilities, municipal fees, insurance, ...
    Housing,
    /// Everything else: subscriptions, transport, insurance, ...
    Personal,
}

/// A recurring monthly expense with a fixed amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedExpense {
    pub description: String,
    pub monthly_amount: Money,
    pub category: ExpenseCategory,
}

impl FixedExpense {
    pub fn new(
        description: impl Into<String>,
        monthly_amount: Money,
        category: ExpenseCategory,
    ) -> Self {
        Self {
            description: description.into(),
            monthly_amount: monthly_amount.clamp_non_negative(),
            category,
        }
    }

    /// Seeds housing expenses from a listing's recurring cost buckets
    pub fn from_listing(listing: &ListingSnapshot) -> Vec<FixedExpense> {
        listing
            .monthly_costs
            .iter()
            .map(|cost| {
                FixedExpense::new(
                    cost.label.clone(),
                    cost.monthly_amount,
                    ExpenseCategory::Housing,
                )
            })
            .collect()
    }
}

/// An estimated monthly consumption cost
///
/// Typically seeded from a reference-budget lookup and edited by the user
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivingCost {
    pub description: String,
    pub monthly_amount: Money,
}

impl LivingCost {
    pub fn new(description: impl Into<String>, monthly_amount: Money) -> Self {
        Self {
            description: description.into(),
            monthly_amount: monthly_amount.clamp_non_negative(),
        }
    }

    /// Seeds living costs from a reference household budget, one entry per
    /// budget category
    pub fn from_budget(budget: &ReferenceBudget) -> Vec<LivingCost> {
        budget
            .categories
            .iter()
            .map(|category| LivingCost::new(category.label.clone(), category.monthly_amount))
            .collect()
    }
}

/// Sum of monthly amounts across fixed expenses
pub fn monthly_expense_total(expenses: &[FixedExpense]) -> Money {
    expenses.iter().map(|e| e.monthly_amount).sum()
}

/// Sum of monthly amounts across living costs
pub fn monthly_living_cost_total(costs: &[LivingCost]) -> Money {
    costs.iter().map(|c| c.monthly_amount).sum()
}
