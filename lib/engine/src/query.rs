//! User query model
//!
//! A query is transient, scoped to one recommendation call: a risk profile,
//! an amount, a desired product count, and an investment horizon.

use clap::ValueEnum;
use investx_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound for the requested amount
pub const MAX_AMOUNT: f64 = 300_000.0;

/// The four risk profile labels used in the source data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum RiskProfile {
    UltraConservative,
    Conservative,
    Moderate,
    Dynamic,
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskProfile::UltraConservative => "Ultra-Conservative",
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Moderate => "Moderate",
            RiskProfile::Dynamic => "Dynamic",
        };
        write!(f, "{label}")
    }
}

/// The three investment horizon labels used in the source data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Period {
    /// Menos que 6 meses
    #[value(name = "short")]
    LessThanSixMonths,
    /// 6 meses a 1 ano
    #[value(name = "medium")]
    SixMonthsToOneYear,
    /// Mais que 1 ano
    #[value(name = "long")]
    MoreThanOneYear,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Period::LessThanSixMonths => "Menos que 6 meses",
            Period::SixMonthsToOneYear => "6 meses a 1 ano",
            Period::MoreThanOneYear => "Mais que 1 ano",
        };
        write!(f, "{label}")
    }
}

/// A validated product count
///
/// The count must be a positive integer. Fractional input is a usage error
/// and is reported, never silently truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCount(usize);

impl ProductCount {
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::InvalidProductCount("0".to_string()));
        }
        Ok(Self(count))
    }

    /// Parse from user-supplied text
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        match trimmed.parse::<usize>() {
            Ok(count) => Self::new(count),
            Err(_) => Err(Error::InvalidProductCount(trimmed.to_string())),
        }
    }

    /// Validate a floating-point count
    ///
    /// Accepts only whole positive values; `2.5` is an error.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() || value.fract() != 0.0 || value < 1.0 {
            return Err(Error::InvalidProductCount(value.to_string()));
        }
        Self::new(value as usize)
    }

    #[inline]
    #[must_use]
    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ProductCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub profile: RiskProfile,
    pub amount: f64,
    pub count: ProductCount,
    pub period: Period,
}

impl Query {
    pub fn new(profile: RiskProfile, amount: f64, count: ProductCount, period: Period) -> Result<Self> {
        if !(0.0..=MAX_AMOUNT).contains(&amount) {
            return Err(Error::AmountOutOfRange {
                amount,
                max: MAX_AMOUNT,
            });
        }
        Ok(Self {
            profile,
            amount,
            count,
            period,
        })
    }

    /// The query's input text: profile, amount, and period, space-separated
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} {} {}", self.profile, self.amount, self.period)
    }
}
