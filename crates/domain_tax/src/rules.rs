//! Versioned tax rules
//!
//! Every bracket edge, rate, and deduction parameter is data, not code:
//! the rules describe one tax year and are swapped wholesale when the year
//! (or jurisdiction) changes. Nothing in the calculator re-derives them.

use once_cell::sync::Lazy;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::{Money, Rate};

/// Errors from loading or validating a rule set
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("Failed to load tax rules: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid tax rules: {0}")]
    Invalid(String),
}

/// One marginal bracket of the step tax (trinnskatt)
///
/// Applied to gross income: the amount falling between `lower` and `upper`
/// is taxed at `rate`. The top bracket has no upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower: Money,
    pub upper: Option<Money>,
    pub rate: Rate,
}

impl TaxBracket {
    /// The tax this bracket contributes for a gross income
    pub fn marginal_tax(&self, gross_income: Money) -> Money {
        let capped = match self.upper {
            Some(upper) => gross_income.min(upper),
            None => gross_income,
        };
        self.rate.apply(&(capped - self.lower).clamp_non_negative())
    }
}

/// The complete rule set for one tax year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRules {
    /// The tax year these parameters describe
    pub year: i32,
    /// Flat rate on ordinary income (alminnelig inntekt) after deductions
    pub ordinary_income_tax_rate: Rate,
    /// Social security contribution (trygdeavgift), levied on gross income
    pub social_security_rate: Rate,
    /// Deduction rate applied to interest paid on loans
    pub interest_deduction_rate: Rate,
    /// Standard deduction (minstefradrag) as a share of income...
    pub standard_deduction_rate: Rate,
    /// ...capped at this ceiling
    pub standard_deduction_cap: Money,
    /// Step tax (trinnskatt) brackets over gross income
    pub brackets: Vec<TaxBracket>,
}

impl TaxRules {
    /// The 2025 rule set
    pub fn year_2025() -> Self {
        Self {
            year: 2025,
            ordinary_income_tax_rate: Rate::new(dec!(0.1772)),
            social_security_rate: Rate::new(dec!(0.077)),
            interest_deduction_rate: Rate::new(dec!(0.22)),
            standard_deduction_rate: Rate::new(dec!(0.46)),
            standard_deduction_cap: Money::from_major(92_000),
            brackets: vec![
                TaxBracket {
                    lower: Money::from_major(217_400),
                    upper: Some(Money::from_major(306_050)),
                    rate: Rate::new(dec!(0.017)),
                },
                TaxBracket {
                    lower: Money::from_major(306_050),
                    upper: Some(Money::from_major(697_150)),
                    rate: Rate::new(dec!(0.04)),
                },
                TaxBracket {
                    lower: Money::from_major(697_150),
                    upper: Some(Money::from_major(942_400)),
                    rate: Rate::new(dec!(0.137)),
                },
                TaxBracket {
                    lower: Money::from_major(942_400),
                    upper: Some(Money::from_major(1_410_750)),
                    rate: Rate::new(dec!(0.167)),
                },
                TaxBracket {
                    lower: Money::from_major(1_410_750),
                    upper: None,
                    rate: Rate::new(dec!(0.177)),
                },
            ],
        }
    }

    /// The rule set in effect for new calculations
    pub fn current() -> &'static TaxRules {
        static CURRENT: Lazy<TaxRules> = Lazy::new(TaxRules::year_2025);
        &CURRENT
    }

    /// Loads a rule set from a configuration file (TOML, YAML, or JSON)
    pub fn from_file(path: &str) -> Result<TaxRules, RulesError> {
        let rules: TaxRules = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?
            .try_deserialize()?;
        rules.validate()?;
        Ok(rules)
    }

    /// Checks that the brackets form an ordered, contiguous ladder
    pub fn validate(&self) -> Result<(), RulesError> {
        for (index, bracket) in self.brackets.iter().enumerate() {
            if let Some(upper) = bracket.upper {
                if upper <= bracket.lower {
                    return Err(RulesError::Invalid(format!(
                        "bracket {} upper bound {} is not above its lower bound {}",
                        index, upper, bracket.lower
                    )));
                }
            } else if index + 1 != self.brackets.len() {
                return Err(RulesError::Invalid(format!(
                    "bracket {} is unbounded but not the top bracket",
                    index
                )));
            }

            if index > 0 {
                let previous = &self.brackets[index - 1];
                if previous.upper != Some(bracket.lower) {
                    return Err(RulesError::Invalid(format!(
                        "bracket {} does not start where bracket {} ends",
                        index,
                        index - 1
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for TaxRules {
    fn default() -> Self {
        Self::year_2025()
    }
}
