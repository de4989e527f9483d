//! Economy Domain - Household financial records and external data ports
//!
//! This crate holds the records the calculators consume:
//! - **Income**: annual income streams, taxable or tax-free
//! - **Expenses**: fixed monthly expenses and estimated living costs
//! - **Houses**: homes with their housing loans and purchase terms
//! - **EconomyData**: the aggregate handed to the calculators, including the
//!   active-house selection
//!
//! It also defines the ports for the two external collaborators (listing
//! extraction and reference household budgets). Provider data is coerced
//! defensively; provider failures are surfaced as distinct error kinds.

pub mod economy;
pub mod expense;
pub mod house;
pub mod income;
pub mod ports;

pub use economy::EconomyData;
pub use expense::{
    monthly_expense_total, monthly_living_cost_total, ExpenseCategory, FixedExpense, LivingCost,
};
pub use house::House;
pub use income::{tax_free_total, taxable_total, Income};
pub use ports::{
    default_value_growth, BudgetCategory, HouseholdProfile, ListingCost, ListingProvider,
    ListingSnapshot, ProviderError, RawListingCost, RawListingSnapshot, ReferenceBudget,
    ReferenceBudgetProvider,
};
