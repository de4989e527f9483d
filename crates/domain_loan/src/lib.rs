//! Loan Domain - Amortizing liabilities and their repayment schedules
//!
//! This crate contains the loan records and the annuity amortization engine:
//! - **Records**: `Loan` (any amortizing liability), `HousingLoan` (loan +
//!   down-payment capital)
//! - **Engine**: `amortize` produces the full term-by-term schedule with
//!   yearly rollups and totals
//! - **Cache**: `ScheduleCache` memoizes schedules by loan parameter tuple
//!
//! All computation is total: degenerate inputs (zero terms, zero rate,
//! out-of-range lookups) produce empty or clamped results, never errors.

pub mod cache;
pub mod loan;
pub mod schedule;

pub use cache::{ScheduleCache, ScheduleKey};
pub use loan::{HousingLoan, Loan};
pub use schedule::{amortize, AmortizationSchedule, ScheduleRow, ScheduleTotals, YearTotals};
