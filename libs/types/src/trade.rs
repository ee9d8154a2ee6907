//! Trade execution types
//!
//! A trade is a fact: immutable once created, never updated or deleted.
//! One order produces at most one trade (no partial fills).

use crate::ids::{OrderId, Symbol, TradeId};
use crate::numeric::Price;
use crate::order::Order;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An executed fill for a single order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    pub order_id: OrderId,
    pub symbol: Symbol,
    pub quantity: i64,
    pub price: Price,
    pub executed_at: DateTime<Utc>,
}

impl Trade {
    /// Record a fill for `order` at `price`
    pub fn new(order: &Order, price: Price) -> Self {
        Self {
            id: TradeId::new(),
            order_id: order.id,
            symbol: order.symbol.clone(),
            quantity: order.quantity,
            price,
            executed_at: Utc::now(),
        }
    }

    /// Trade value (price × quantity)
    pub fn value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price.as_decimal()
    }
}
