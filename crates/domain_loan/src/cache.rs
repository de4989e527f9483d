//! Schedule cache
//!
//! Memoizes amortization results keyed by the full loan parameter tuple.
//! Every schedule read in the system goes through this accessor, so repeated
//! queries for the same loan (per-month lookups in projections, the tax
//! engine's interest sums) reuse one computed schedule.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::loan::Loan;
use crate::schedule::{amortize, AmortizationSchedule};

/// Cache key: every field that identifies a loan instance
///
/// The description does not affect the math but is part of the key, because
/// schedules are looked up per named loan. Changing any field produces a
/// distinct key and therefore a fresh computation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScheduleKey {
    description: String,
    amount: Decimal,
    interest_rate: Decimal,
    term_years: u32,
    terms_per_year: u32,
    monthly_fee: Decimal,
    start_date: NaiveDate,
}

impl ScheduleKey {
    pub fn for_loan(loan: &Loan) -> Self {
        Self {
            description: loan.description().to_string(),
            amount: loan.amount().amount(),
            interest_rate: loan.interest_rate().as_decimal(),
            term_years: loan.term_years(),
            terms_per_year: loan.terms_per_year(),
            monthly_fee: loan.monthly_fee().amount(),
            start_date: loan.start_date(),
        }
    }
}

/// Unbounded memoizer in front of [`amortize`]
///
/// The entry count is bounded by the number of loans a household manages, so
/// there is no eviction. The interior mutex makes the cache safe to share
/// across threads; concurrent misses on the same key may both compute, and
/// the second insert wins. The results are value-identical, so only the
/// duplicated work is lost.
#[derive(Debug, Default)]
pub struct ScheduleCache {
    entries: Mutex<HashMap<ScheduleKey, Arc<AmortizationSchedule>>>,
}

impl ScheduleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached schedule for a loan, computing it on first use
    pub fn get_or_compute(&self, loan: &Loan) -> Arc<AmortizationSchedule> {
        let key = ScheduleKey::for_loan(loan);
        // A poisoned lock still guards a structurally sound map
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(schedule) = entries.get(&key) {
            debug!(loan = %loan.description(), "schedule cache hit");
            return Arc::clone(schedule);
        }

        debug!(
            loan = %loan.description(),
            terms = loan.number_of_terms(),
            "schedule cache miss"
        );
        let schedule = Arc::new(amortize(loan));
        entries.insert(key, Arc::clone(&schedule));
        schedule
    }

    /// Number of cached schedules
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all cached schedules
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Money, Rate};
    use rust_decimal_macros::dec;

    fn loan() -> Loan {
        Loan::new(
            "Mortgage",
            Money::from_major(320_000),
            Rate::from_percentage(dec!(3.6)),
            10,
            12,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .with_monthly_fee(Money::from_major(25))
    }

    #[test]
    fn test_identical_loans_share_one_entry() {
        let cache = ScheduleCache::new();
        let first = cache.get_or_compute(&loan());
        let second = cache.get_or_compute(&loan());

        assert_eq!(cache.len(), 1);
        assert!(Arc::ptr_eq(&first, &second), "Hit must return the same Arc");
    }

    #[test]
    fn test_parameter_change_is_a_miss() {
        let cache = ScheduleCache::new();
        cache.get_or_compute(&loan());

        let repriced = Loan::new(
            "Mortgage",
            Money::from_major(320_000),
            Rate::from_percentage(dec!(3.7)),
            10,
            12,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .with_monthly_fee(Money::from_major(25));
        let schedule = cache.get_or_compute(&repriced);

        assert_eq!(cache.len(), 2);
        assert!(schedule.rows[0].interest > Money::zero());
    }

    #[test]
    fn test_description_is_part_of_the_key() {
        let cache = ScheduleCache::new();
        cache.get_or_compute(&loan());

        let renamed = Loan::new(
            "Cabin mortgage",
            Money::from_major(320_000),
            Rate::from_percentage(dec!(3.6)),
            10,
            12,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .with_monthly_fee(Money::from_major(25));
        cache.get_or_compute(&renamed);

        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_clear_empties_the_cache() {
        let cache = ScheduleCache::new();
        cache.get_or_compute(&loan());
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }
}
