//! Order lifecycle types
//!
//! An order is created in NEW, advanced to PLACED once persisted, and
//! optionally advanced to EXECUTED by the execution engine. CANCELLED is
//! reachable from any state: status updates are an unconditional overwrite
//! and the linear machine below is a design intent, not an enforced guard.

use crate::ids::{OrderId, Symbol};
use crate::numeric::Price;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (position increases)
    BUY,
    /// Sell order (position decreases)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

/// Execution style of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStyle {
    /// Executes immediately at the instrument's live price
    MARKET,
    /// Executes only when the reference price satisfies the limit bound
    LIMIT,
}

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Constructed, not yet persisted
    NEW,
    /// Persisted and awaiting execution
    PLACED,
    /// Filled; a trade exists for this order
    EXECUTED,
    /// Withdrawn
    CANCELLED,
}

impl OrderStatus {
    /// Check if status is terminal under the intended state machine
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::EXECUTED | OrderStatus::CANCELLED)
    }
}

/// Complete order structure
///
/// `price` is set iff `style` is LIMIT. Owned by the ledger store after
/// creation; mutated only through the status-update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub style: OrderStyle,
    pub quantity: i64,
    pub price: Option<Price>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order in NEW status
    pub fn new(
        symbol: Symbol,
        side: Side,
        style: OrderStyle,
        quantity: i64,
        price: Option<Price>,
    ) -> Self {
        Self {
            id: OrderId::new(),
            symbol,
            side,
            style,
            quantity,
            price,
            status: OrderStatus::NEW,
            created_at: Utc::now(),
        }
    }

    /// Signed position change this order produces when filled
    pub fn position_delta(&self) -> i64 {
        match self.side {
            Side::BUY => self.quantity,
            Side::SELL => -self.quantity,
        }
    }

    /// True for market orders still awaiting execution (sweep candidates)
    pub fn is_pending_market(&self) -> bool {
        self.status == OrderStatus::PLACED && self.style == OrderStyle::MARKET
    }
}
