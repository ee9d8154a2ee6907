//! Order lifecycle management
//!
//! Validates and creates orders, drives status transitions, and triggers
//! immediate execution for market orders. Validation happens before any
//! state mutation: a rejected request never leaves a partial order behind.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use types::errors::LedgerError;
use types::ids::{OrderId, Symbol};
use types::numeric::Price;
use types::order::{Order, OrderStatus, OrderStyle, Side};
use types::trade::Trade;

use crate::execution::ExecutionEngine;
use crate::store::LedgerStore;

/// A request to create an order
///
/// `price` is carried raw; positivity and presence rules are enforced by
/// [`OrderManager::place`] so violations surface as validation errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub symbol: Symbol,
    pub side: Side,
    pub style: OrderStyle,
    pub quantity: i64,
    #[serde(default)]
    pub price: Option<Price>,
}

/// Outcome of a successful `place` call
///
/// `execution` is present only when a market order filled synchronously. Its
/// absence is not a failure: the order may simply be PLACED with its fill
/// deferred to a later sweep.
#[derive(Debug, Clone, Serialize)]
pub struct OrderPlacement {
    pub order: Order,
    pub execution: Option<Trade>,
}

/// Validates and creates orders, drives status transitions
#[derive(Clone)]
pub struct OrderManager {
    store: Arc<LedgerStore>,
    execution: ExecutionEngine,
}

impl OrderManager {
    pub fn new(store: Arc<LedgerStore>) -> Self {
        let execution = ExecutionEngine::new(Arc::clone(&store));
        Self { store, execution }
    }

    /// Validate, persist, and (for market orders) immediately execute
    ///
    /// Market-execution failure is swallowed: the order stays PLACED and can
    /// be retried through [`ExecutionEngine::sweep`].
    pub fn place(&self, request: OrderRequest) -> Result<OrderPlacement, LedgerError> {
        self.validate(&request)?;

        let mut order = Order::new(
            request.symbol,
            request.side,
            request.style,
            request.quantity,
            request.price,
        );
        order.status = OrderStatus::PLACED;
        self.store.insert_order(order.clone());
        tracing::info!(order_id = %order.id, symbol = %order.symbol, "order placed");

        let execution = if order.style == OrderStyle::MARKET {
            match self.execution.execute_market(&order) {
                Ok(trade) => Some(trade),
                Err(err) => {
                    tracing::warn!(
                        order_id = %order.id,
                        error = %err,
                        "market execution failed, order left PLACED"
                    );
                    None
                }
            }
        } else {
            None
        };

        // Re-read so the returned order reflects any execution status change
        let order = self.store.order(&order.id).unwrap_or(order);
        Ok(OrderPlacement { order, execution })
    }

    /// Order by id, `None` when unknown
    pub fn get(&self, id: &OrderId) -> Option<Order> {
        self.store.order(id)
    }

    /// All orders in creation order
    pub fn list(&self) -> Vec<Order> {
        self.store.orders()
    }

    /// Unconditional status overwrite; returns false for unknown orders
    pub fn update_status(&self, id: &OrderId, status: OrderStatus) -> bool {
        self.store.update_order_status(id, status)
    }

    fn validate(&self, request: &OrderRequest) -> Result<(), LedgerError> {
        if request.quantity <= 0 {
            return Err(LedgerError::NonPositiveQuantity);
        }
        if request.style == OrderStyle::LIMIT {
            match request.price {
                None => return Err(LedgerError::MissingLimitPrice),
                Some(price) if !price.is_positive() => {
                    return Err(LedgerError::NonPositiveLimitPrice)
                }
                Some(_) => {}
            }
        }
        if self.store.instrument(&request.symbol).is_none() {
            return Err(LedgerError::InstrumentNotFound {
                symbol: request.symbol.to_string(),
            });
        }
        Ok(())
    }
}
