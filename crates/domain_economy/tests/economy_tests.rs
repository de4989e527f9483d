//! Economy Aggregate Tests
//!
//! Exercises the aggregate the calculators consume: active-house
//! resolution, combined loan sets, expense totals, and the coercion of
//! provider records into domain records.

use chrono::NaiveDate;
use core_kernel::{Money, Rate};
use domain_economy::{
    BudgetCategory, EconomyData, ExpenseCategory, FixedExpense, House, Income, LivingCost,
    RawListingSnapshot, ReferenceBudget,
};
use domain_loan::{HousingLoan, Loan};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, 1).unwrap()
}

fn mortgage() -> HousingLoan {
    HousingLoan::new(
        Loan::new(
            "Mortgage",
            Money::from_major(3_000_000),
            Rate::from_percentage(dec!(4.5)),
            25,
            12,
            date(2023, 6),
        ),
        Money::from_major(750_000),
    )
}

fn sample_economy() -> EconomyData {
    let mut economy = EconomyData::new();
    economy.incomes = vec![
        Income::new("Salary", Money::from_major(620_000)),
        Income::tax_free("Child benefit", Money::from_major(24_000)),
    ];
    economy.loans = vec![Loan::new(
        "Car",
        Money::from_major(250_000),
        Rate::from_percentage(dec!(6.5)),
        5,
        12,
        date(2024, 3),
    )];
    economy.fixed_expenses = vec![
        FixedExpense::new(
            "Electricity",
            Money::from_major(1800),
            ExpenseCategory::Housing,
        ),
        FixedExpense::new(
            "Insurance",
            Money::from_major(900),
            ExpenseCategory::Personal,
        ),
    ];
    economy.living_costs = vec![LivingCost::new("Food", Money::from_major(7200))];
    economy.personal_equity = Money::from_major(150_000);
    economy.houses = vec![House::new("Apartment", mortgage())];
    economy
}

#[test]
fn test_combined_loans_follow_active_house() {
    let mut economy = sample_economy();
    assert_eq!(
        economy.all_loans().len(),
        1,
        "Without an active house only general loans count"
    );

    let house_id = economy.houses[0].id;
    economy.set_active_house(house_id);

    let loans = economy.all_loans();
    assert_eq!(loans.len(), 2);
    assert!(loans.iter().any(|l| l.description() == "Mortgage"));
}

#[test]
fn test_expense_totals() {
    let economy = sample_economy();
    assert_eq!(economy.monthly_fixed_expenses(), Money::from_major(2700));
    assert_eq!(economy.monthly_living_costs(), Money::from_major(7200));
}

#[test]
fn test_house_builder_overrides() {
    let house = House::new("Fixer-upper", mortgage())
        .with_purchase_price(Money::from_major(3_500_000))
        .with_value_growth(Rate::from_percentage(dec!(1.5)));

    assert_eq!(house.purchase_price, Money::from_major(3_500_000));
    assert_eq!(house.value_growth, Rate::from_percentage(dec!(1.5)));
}

#[test]
fn test_house_from_listing_record() {
    let raw = RawListingSnapshot {
        name: Some("Seaside flat".to_string()),
        price: Some(3_750_000.0),
        closing_costs: Some(95_000.0),
        monthly_costs: vec![],
        expected_growth: Some(3.0),
    };
    let house = House::from_listing(&raw.coerce(), mortgage());

    assert_eq!(house.name, "Seaside flat");
    assert_eq!(house.purchase_price, Money::from_major(3_750_000));
    assert_eq!(house.total_purchase_cost(), Money::from_major(3_845_000));
    assert_eq!(house.value_growth, Rate::from_percentage(dec!(3)));
}

#[test]
fn test_living_costs_seeded_from_reference_budget() {
    let budget = ReferenceBudget {
        categories: vec![
            BudgetCategory {
                label: "Food and drink".to_string(),
                monthly_amount: Money::from_major(7200),
            },
            BudgetCategory {
                label: "Household items".to_string(),
                monthly_amount: Money::from_major(1100),
            },
        ],
    };

    let mut economy = sample_economy();
    economy.living_costs = LivingCost::from_budget(&budget);

    assert_eq!(economy.living_costs.len(), 2);
    assert_eq!(economy.monthly_living_costs(), budget.monthly_total());
}

#[test]
fn test_aggregate_serde_round_trip() {
    let mut economy = sample_economy();
    let house_id = economy.houses[0].id;
    economy.set_active_house(house_id);

    let json = serde_json::to_string(&economy).unwrap();
    let back: EconomyData = serde_json::from_str(&json).unwrap();

    assert_eq!(economy, back);
    assert!(back.active_house().is_some());
}
