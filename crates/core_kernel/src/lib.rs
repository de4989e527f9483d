//! Core Kernel - Foundational types for the household economy calculators
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money and Rate types with precise decimal arithmetic
//! - Calendar-month arithmetic for payment scheduling
//! - Strongly-typed identifiers

pub mod identifiers;
pub mod money;
pub mod temporal;

pub use identifiers::HouseId;
pub use money::{Money, Rate};
pub use temporal::{
    add_months, fractional_years_between, month_label, month_start, months_between,
};
