//! Fixed-point decimal types for prices
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Prices carry whatever scale the caller supplied; no implicit rounding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A price expressed as a fixed-point decimal
///
/// Construction is unchecked: positivity requirements (e.g. limit prices must
/// be > 0) are enforced by the order lifecycle validation, not here, so that
/// the violation surfaces as a validation error rather than a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Wrap a decimal as a price
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Price from a whole number of currency units
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Get inner decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// True when strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// The zero price, used when a position's cost basis is reset
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Decimal>().map(Self)
    }
}
