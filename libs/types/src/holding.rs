//! Portfolio holding and cost-basis types
//!
//! One holding per symbol. Cost basis follows the weighted-average rule: a
//! position change of dq at price p moves the average to
//! (old_qty * old_avg + dq * p) / (old_qty + dq). A position returning exactly
//! to zero resets its cost basis; the store removes such holdings entirely.

use crate::ids::Symbol;
use crate::numeric::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net accumulated position and cost basis for one symbol
///
/// `current_value` is quantity × live instrument price. It is refreshed on
/// every position change and on every portfolio snapshot read, so it is never
/// observed stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioHolding {
    pub symbol: Symbol,
    pub quantity: i64,
    pub average_price: Price,
    pub current_value: Decimal,
}

impl PortfolioHolding {
    /// Open a position on the first trade for a symbol
    pub fn open(symbol: Symbol, quantity: i64, trade_price: Price, market_price: Price) -> Self {
        Self {
            symbol,
            quantity,
            average_price: trade_price,
            current_value: Decimal::from(quantity) * market_price.as_decimal(),
        }
    }

    /// Fold a position change into the holding
    ///
    /// The weighted-average rule applies to both sides: sells at a price away
    /// from the average shift it, exactly as buys do. A change that brings the
    /// quantity to exactly zero clears the position instead.
    pub fn apply(&mut self, quantity_change: i64, trade_price: Price, market_price: Price) {
        if self.quantity + quantity_change == 0 {
            self.quantity = 0;
            self.average_price = Price::zero();
            self.current_value = Decimal::ZERO;
            return;
        }

        let total_cost = Decimal::from(self.quantity) * self.average_price.as_decimal()
            + Decimal::from(quantity_change) * trade_price.as_decimal();
        self.quantity += quantity_change;
        self.average_price = Price::new(total_cost / Decimal::from(self.quantity));
        self.current_value = Decimal::from(self.quantity) * market_price.as_decimal();
    }

    /// Recompute `current_value` against the live market price
    pub fn revalue(&mut self, market_price: Price) {
        self.current_value = Decimal::from(self.quantity) * market_price.as_decimal();
    }

    /// Total acquisition cost of the position (quantity × average price)
    pub fn cost_basis(&self) -> Decimal {
        Decimal::from(self.quantity) * self.average_price.as_decimal()
    }

    /// Mark-to-market gain or loss (current value - cost basis)
    pub fn unrealized_pnl(&self) -> Decimal {
        self.current_value - self.cost_basis()
    }
}
