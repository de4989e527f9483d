//! House records

use core_kernel::{HouseId, Money, Rate};
use domain_loan::HousingLoan;
use serde::{Deserialize, Serialize};

use crate::ports::{default_value_growth, ListingSnapshot};

/// A home owned (or being considered) by the household
///
/// Each house owns its housing loan and the purchase terms; the economy
/// aggregate flags at most one house as active for housing-related
/// calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub id: HouseId,
    pub name: String,
    pub loan: HousingLoan,
    /// Agreed purchase price
    pub purchase_price: Money,
    /// One-off costs on top of the price (document fees, registration, ...)
    pub closing_costs: Money,
    /// Assumed annual market value growth
    pub value_growth: Rate,
}

impl House {
    /// Creates a house priced at the loan's implied home value
    pub fn new(name: impl Into<String>, loan: HousingLoan) -> Self {
        let purchase_price = loan.implied_home_value();
        Self {
            id: HouseId::new_v7(),
            name: name.into(),
            loan,
            purchase_price,
            closing_costs: Money::zero(),
            value_growth: default_value_growth(),
        }
    }

    /// Creates a house from an extracted listing record
    ///
    /// The listing supplies price, closing costs, and expected growth; the
    /// loan is whatever financing the user has configured for it.
    pub fn from_listing(listing: &ListingSnapshot, loan: HousingLoan) -> Self {
        Self {
            id: HouseId::new_v7(),
            name: listing.name.clone(),
            loan,
            purchase_price: listing.price,
            closing_costs: listing.closing_costs,
            value_growth: listing.expected_growth,
        }
    }

    pub fn with_purchase_price(mut self, price: Money) -> Self {
        self.purchase_price = price.clamp_non_negative();
        self
    }

    pub fn with_closing_costs(mut self, costs: Money) -> Self {
        self.closing_costs = costs.clamp_non_negative();
        self
    }

    pub fn with_value_growth(mut self, growth: Rate) -> Self {
        self.value_growth = growth;
        self
    }

    /// Total cash outlay at purchase: price plus closing costs
    pub fn total_purchase_cost(&self) -> Money {
        self.purchase_price + self.closing_costs
    }
}
