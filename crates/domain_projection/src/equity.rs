//! Home equity projection
//!
//! Equity at any point in time is the market-adjusted home value minus the
//! remaining loan balance. The home value compounds annually from the value
//! implied at loan inception (principal + capital); the balance comes from
//! the amortization schedule, clamped at the schedule's end.

use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use core_kernel::{add_months, fractional_years_between, months_between, Money, Rate};
use domain_loan::{HousingLoan, ScheduleCache};

/// Timeline position of an equity snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquityCheckpoint {
    /// At loan inception
    AtStart,
    /// At the supplied current date
    Today,
    /// A whole number of years after loan inception
    YearsAfterStart(u32),
}

/// Equity at one timeline checkpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquitySnapshot {
    pub checkpoint: EquityCheckpoint,
    pub date: NaiveDate,
    pub home_value: Money,
    pub remaining_debt: Money,
    pub equity: Money,
}

/// One month of the tabular equity series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub month_offset: u32,
    pub date: NaiveDate,
    pub home_value: Money,
    pub remaining_debt: Money,
    pub equity: Money,
}

/// Equity snapshots at the fixed timeline checkpoints: loan start, today,
/// and one, two, and five years after start
///
/// `today` is supplied by the caller so projections stay deterministic.
/// Each checkpoint clamps independently: dates before the loan start count
/// as the start, dates past the schedule keep the final balance.
#[instrument(skip_all, fields(loan = housing.loan().description()))]
pub fn equity_checkpoints(
    housing: &HousingLoan,
    growth: Rate,
    today: NaiveDate,
    cache: &ScheduleCache,
) -> Vec<EquitySnapshot> {
    let start = housing.loan().start_date();
    let mut snapshots = vec![
        snapshot_at(housing, growth, EquityCheckpoint::AtStart, start, cache),
        snapshot_at(housing, growth, EquityCheckpoint::Today, today, cache),
    ];
    for years in [1u32, 2, 5] {
        let date = add_months(start, years * 12);
        snapshots.push(snapshot_at(
            housing,
            growth,
            EquityCheckpoint::YearsAfterStart(years),
            date,
            cache,
        ));
    }
    snapshots
}

/// The month-by-month equity series from loan start
///
/// Home value grows by the monthly factor `(1+g)^(1/12)` each elapsed month,
/// which matches the annual compounding formula at fractional years.
#[instrument(skip_all, fields(loan = housing.loan().description(), months = months))]
pub fn equity_series(
    housing: &HousingLoan,
    growth: Rate,
    months: u32,
    cache: &ScheduleCache,
) -> Vec<EquityPoint> {
    let start = housing.loan().start_date();
    let schedule = cache.get_or_compute(housing.loan());
    let monthly_factor = clamped_factor(growth).powf(1.0 / 12.0);

    let mut home_value = housing.implied_home_value();
    let mut points = Vec::with_capacity(months as usize + 1);
    for month in 0..=months {
        if month > 0 {
            home_value = home_value.multiply(monthly_factor);
        }
        let remaining_debt = schedule.balance_after_terms(month as usize);
        points.push(EquityPoint {
            month_offset: month,
            date: add_months(start, month),
            home_value,
            remaining_debt,
            equity: home_value - remaining_debt,
        });
    }
    points
}

fn snapshot_at(
    housing: &HousingLoan,
    growth: Rate,
    checkpoint: EquityCheckpoint,
    date: NaiveDate,
    cache: &ScheduleCache,
) -> EquitySnapshot {
    let start = housing.loan().start_date();
    let months = months_between(start, date).max(0) as usize;
    let years = fractional_years_between(start, date).max(0.0);

    let home_value = housing
        .implied_home_value()
        .multiply(clamped_factor(growth).powf(years));
    let remaining_debt = cache
        .get_or_compute(housing.loan())
        .balance_after_terms(months);

    EquitySnapshot {
        checkpoint,
        date,
        home_value,
        remaining_debt,
        equity: home_value - remaining_debt,
    }
}

/// Annual growth factor, clamped to zero for declines of 100% or more
fn clamped_factor(growth: Rate) -> Decimal {
    growth.growth_factor().max(Decimal::ZERO)
}
