//! Projection Domain - Forward-looking household cash flow and equity
//!
//! Composes the loan and tax engines into two projections:
//! - **Payment plan**: month-by-month income, expenses, and balance over a
//!   multi-year horizon, with an annual raise cycle and per-loan schedule
//!   lookups
//! - **Equity**: home value minus remaining debt at timeline checkpoints and
//!   as a monthly series
//!
//! Every schedule read goes through the shared [`domain_loan::ScheduleCache`],
//! so projecting thirty years of months does not recompute thirty years of
//! schedules.

pub mod equity;
pub mod payment_plan;

pub use equity::{
    equity_checkpoints, equity_series, EquityCheckpoint, EquityPoint, EquitySnapshot,
};
pub use payment_plan::{
    generate_payment_plan, MonthlyRow, PlanOptions, DEFAULT_HORIZON_YEARS,
};
