//! The household economy aggregate

use core_kernel::{HouseId, Money};
use domain_loan::{HousingLoan, Loan};
use serde::{Deserialize, Serialize};

use crate::expense::{
    monthly_expense_total, monthly_living_cost_total, FixedExpense, LivingCost,
};
use crate::house::House;
use crate::income::Income;

/// Everything the household's calculators need, in one record
///
/// Owned by the presentation/persistence layer; the calculators receive it
/// by reference and return new derived structures, never mutating it. The
/// "active house" is an explicit optional reference resolved once through
/// [`EconomyData::active_house`], not an implicit lookup threaded through
/// every computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EconomyData {
    pub incomes: Vec<Income>,
    /// General (non-housing) loans
    pub loans: Vec<Loan>,
    pub houses: Vec<House>,
    pub fixed_expenses: Vec<FixedExpense>,
    pub living_costs: Vec<LivingCost>,
    /// Liquid savings and other equity outside the home
    pub personal_equity: Money,
    /// Which house, if any, counts as the housing loan for calculations
    pub active_house_id: Option<HouseId>,
}

impl EconomyData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the active house, if one is selected and still present
    pub fn active_house(&self) -> Option<&House> {
        let id = self.active_house_id?;
        self.houses.iter().find(|house| house.id == id)
    }

    /// The active house's loan, if any
    pub fn active_housing_loan(&self) -> Option<&HousingLoan> {
        self.active_house().map(|house| &house.loan)
    }

    /// Marks a house as the active one
    pub fn set_active_house(&mut self, id: HouseId) {
        self.active_house_id = Some(id);
    }

    /// The combined loan set for tax and projection purposes: all general
    /// loans plus the active housing loan
    pub fn all_loans(&self) -> Vec<&Loan> {
        let mut loans: Vec<&Loan> = self.loans.iter().collect();
        if let Some(housing) = self.active_housing_loan() {
            loans.push(housing.loan());
        }
        loans
    }

    /// Monthly total of fixed housing and personal expenses
    pub fn monthly_fixed_expenses(&self) -> Money {
        monthly_expense_total(&self.fixed_expenses)
    }

    /// Monthly total of estimated living costs
    pub fn monthly_living_costs(&self) -> Money {
        monthly_living_cost_total(&self.living_costs)
    }
}
