//! Consumption tax calculation
//!
//! Amounts are whole yen. The rate multiplication is done in `Decimal`
//! and the result floored back to yen.

use rust_decimal::prelude::*;
use shared::order::{LineItem, OrderTotals};
use std::fmt;

/// Default consumption tax rate (10%)
pub const DEFAULT_TAX_RATE_PERCENT: u32 = 10;

/// Where the floor is applied when computing tax over several lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaxPolicy {
    /// `floor(Σ amount × rate)` - tax computed once on the order total
    #[default]
    AggregateFloor,
    /// `Σ floor(line amount × rate)` - tax computed per line, then summed
    PerLineFloor,
}

impl fmt::Display for TaxPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AggregateFloor => f.write_str("aggregate"),
            Self::PerLineFloor => f.write_str("per_line"),
        }
    }
}

impl FromStr for TaxPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aggregate" => Ok(Self::AggregateFloor),
            "per_line" | "per-line" => Ok(Self::PerLineFloor),
            other => Err(format!("unknown tax policy: {}", other)),
        }
    }
}

/// Computes order totals at a fixed rate under a rounding policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxCalculator {
    rate_percent: u32,
    policy: TaxPolicy,
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_TAX_RATE_PERCENT, TaxPolicy::AggregateFloor)
    }
}

impl TaxCalculator {
    pub fn new(rate_percent: u32, policy: TaxPolicy) -> Self {
        Self {
            rate_percent,
            policy,
        }
    }

    pub fn rate_percent(&self) -> u32 {
        self.rate_percent
    }

    pub fn policy(&self) -> TaxPolicy {
        self.policy
    }

    /// `floor(amount × rate)`
    pub fn tax_on(&self, amount: i64) -> i64 {
        let rate = Decimal::from(self.rate_percent) / Decimal::ONE_HUNDRED;
        (Decimal::from(amount) * rate)
            .floor()
            .to_i64()
            .unwrap_or(0)
    }

    /// Recompute totals from scratch over the given lines
    pub fn totals(&self, lines: &[LineItem]) -> OrderTotals {
        let amount_excluding_tax = lines
            .iter()
            .fold(0i64, |sum, line| sum.saturating_add(line.amount()));

        let tax_amount = match self.policy {
            TaxPolicy::AggregateFloor => self.tax_on(amount_excluding_tax),
            TaxPolicy::PerLineFloor => lines
                .iter()
                .fold(0i64, |sum, line| sum.saturating_add(self.tax_on(line.amount()))),
        };

        OrderTotals::new(amount_excluding_tax, tax_amount)
    }
}
