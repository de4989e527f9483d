//! Ports for the external data collaborators
//!
//! Two outbound integrations feed the economy: a listing-extraction service
//! that turns free-form listing content into a structured record, and a
//! reference-budget service that estimates household consumption costs.
//! The core only consumes their already-shaped output; the traits here are
//! the seams behind which the real HTTP adapters (or mocks) live.
//!
//! Monetary fields from providers are coerced defensively (missing or
//! non-numeric input becomes zero, negatives are clamped), but provider
//! *failures* are not defaulted away: an unreachable host or a malformed
//! response surfaces as a distinct [`ProviderError`] so the caller never
//! mistakes a fallback for the user's real numbers.

use async_trait::async_trait;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::{Money, Rate};

/// Errors surfaced by the external data providers
///
/// These are the only propagated failures in the system; everything inside
/// the calculators clamps instead.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider host could not be reached
    #[error("Provider unreachable: {service}")]
    Unreachable {
        service: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The request timed out
    #[error("Provider timeout after {duration_ms}ms: {service}")]
    Timeout { service: String, duration_ms: u64 },

    /// The response could not be interpreted
    #[error("Malformed response from {service}: {detail}")]
    Malformed { service: String, detail: String },
}

impl ProviderError {
    pub fn unreachable(service: impl Into<String>) -> Self {
        ProviderError::Unreachable {
            service: service.into(),
            source: None,
        }
    }

    pub fn timeout(service: impl Into<String>, duration_ms: u64) -> Self {
        ProviderError::Timeout {
            service: service.into(),
            duration_ms,
        }
    }

    pub fn malformed(service: impl Into<String>, detail: impl Into<String>) -> Self {
        ProviderError::Malformed {
            service: service.into(),
            detail: detail.into(),
        }
    }

    /// Returns true if retrying may succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ProviderError::Unreachable { .. } | ProviderError::Timeout { .. }
        )
    }
}

/// Assumed annual home value growth when a listing does not state one
pub fn default_value_growth() -> Rate {
    Rate::from_percentage(dec!(2))
}

/// One recurring cost bucket attached to a listing (shared costs, municipal
/// fees, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingCost {
    pub label: String,
    pub monthly_amount: Money,
}

/// A structured, coerced view of a property listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSnapshot {
    pub name: String,
    pub price: Money,
    pub closing_costs: Money,
    pub monthly_costs: Vec<ListingCost>,
    pub expected_growth: Rate,
}

impl ListingSnapshot {
    /// Sum of the listing's recurring monthly cost buckets
    pub fn monthly_cost_total(&self) -> Money {
        self.monthly_costs.iter().map(|c| c.monthly_amount).sum()
    }
}

/// The extraction service's best-effort output, before coercion
///
/// Field extraction from free-form content is lossy; any field may be
/// missing or non-numeric.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListingSnapshot {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub closing_costs: Option<f64>,
    #[serde(default)]
    pub monthly_costs: Vec<RawListingCost>,
    pub expected_growth: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListingCost {
    pub label: Option<String>,
    pub monthly_amount: Option<f64>,
}

impl RawListingSnapshot {
    /// Coerces the raw record into a usable snapshot
    ///
    /// Missing or non-numeric monetary fields become zero, negatives are
    /// clamped, and an absent growth estimate falls back to the 2% default.
    pub fn coerce(self) -> ListingSnapshot {
        if self.price.is_none() || self.expected_growth.is_none() {
            tracing::debug!(
                name = self.name.as_deref().unwrap_or("<unnamed>"),
                missing_price = self.price.is_none(),
                missing_growth = self.expected_growth.is_none(),
                "listing extraction returned partial fields"
            );
        }
        ListingSnapshot {
            name: self.name.unwrap_or_else(|| "Unnamed listing".to_string()),
            price: coerce_amount(self.price),
            closing_costs: coerce_amount(self.closing_costs),
            monthly_costs: self
                .monthly_costs
                .into_iter()
                .map(|cost| ListingCost {
                    label: cost.label.unwrap_or_else(|| "Other".to_string()),
                    monthly_amount: coerce_amount(cost.monthly_amount),
                })
                .collect(),
            expected_growth: self
                .expected_growth
                .filter(|g| g.is_finite())
                .and_then(Decimal::from_f64)
                .map(Rate::from_percentage)
                .unwrap_or_else(default_value_growth),
        }
    }
}

fn coerce_amount(value: Option<f64>) -> Money {
    value
        .map(Money::from_f64)
        .unwrap_or_else(Money::zero)
        .clamp_non_negative()
}

/// Household shape used to look up a reference budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    pub adults: u32,
    pub children: u32,
    pub cars: u32,
}

/// One category of a reference household budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub label: String,
    pub monthly_amount: Money,
}

/// Categorized monthly consumption estimates for a household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceBudget {
    pub categories: Vec<BudgetCategory>,
}

impl ReferenceBudget {
    pub fn monthly_total(&self) -> Money {
        self.categories.iter().map(|c| c.monthly_amount).sum()
    }
}

/// Port for the listing-extraction service
#[async_trait]
pub trait ListingProvider: Send + Sync {
    /// Extracts a structured listing record from source content
    async fn fetch_listing(&self, source: &str) -> Result<ListingSnapshot, ProviderError>;
}

/// Port for the reference household-budget service
#[async_trait]
pub trait ReferenceBudgetProvider: Send + Sync {
    /// Looks up monthly cost estimates for a household shape
    async fn fetch_budget(
        &self,
        profile: &HouseholdProfile,
    ) -> Result<ReferenceBudget, ProviderError>;
}

/// Static in-memory adapters for tests and offline use
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;

    /// Serves one fixed listing snapshot for any source
    #[derive(Debug, Clone)]
    pub struct StaticListingProvider {
        pub snapshot: ListingSnapshot,
    }

    #[async_trait]
    impl ListingProvider for StaticListingProvider {
        async fn fetch_listing(&self, _source: &str) -> Result<ListingSnapshot, ProviderError> {
            Ok(self.snapshot.clone())
        }
    }

    /// Serves one fixed budget for any household profile
    #[derive(Debug, Clone)]
    pub struct StaticBudgetProvider {
        pub budget: ReferenceBudget,
    }

    #[async_trait]
    impl ReferenceBudgetProvider for StaticBudgetProvider {
        async fn fetch_budget(
            &self,
            _profile: &HouseholdProfile,
        ) -> Result<ReferenceBudget, ProviderError> {
            Ok(self.budget.clone())
        }
    }

    /// How a failing provider should fail
    #[derive(Debug, Clone, Copy)]
    pub enum FailureMode {
        Unreachable,
        Timeout,
        Malformed,
    }

    /// Always fails, for error-path tests
    #[derive(Debug, Clone, Copy)]
    pub struct FailingProvider {
        pub mode: FailureMode,
    }

    impl FailingProvider {
        fn error(&self, service: &str) -> ProviderError {
            match self.mode {
                FailureMode::Unreachable => ProviderError::unreachable(service),
                FailureMode::Timeout => ProviderError::timeout(service, 30_000),
                FailureMode::Malformed => {
                    ProviderError::malformed(service, "unexpected payload shape")
                }
            }
        }
    }

    #[async_trait]
    impl ListingProvider for FailingProvider {
        async fn fetch_listing(&self, _source: &str) -> Result<ListingSnapshot, ProviderError> {
            Err(self.error("listing-extraction"))
        }
    }

    #[async_trait]
    impl ReferenceBudgetProvider for FailingProvider {
        async fn fetch_budget(
            &self,
            _profile: &HouseholdProfile,
        ) -> Result<ReferenceBudget, ProviderError> {
            Err(self.error("reference-budget"))
        }
    }
}
