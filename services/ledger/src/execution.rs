//! Execution engine
//!
//! Determines fill price and eligibility for market and limit orders, and
//! commits each fill atomically with the order status change and the
//! position update.

use std::sync::Arc;

use types::errors::LedgerError;
use types::numeric::Price;
use types::order::{Order, OrderStyle, Side};
use types::trade::Trade;

use crate::store::LedgerStore;

/// Prices and fills eligible orders
#[derive(Clone)]
pub struct ExecutionEngine {
    store: Arc<LedgerStore>,
}

impl ExecutionEngine {
    pub fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }

    /// Fill a market order at the instrument's live price
    ///
    /// The trade write, the EXECUTED transition, and the position delta are
    /// committed in one store critical section.
    pub fn execute_market(&self, order: &Order) -> Result<Trade, LedgerError> {
        if order.style != OrderStyle::MARKET {
            return Err(LedgerError::NotMarketOrder);
        }
        let instrument = self.store.instrument(&order.symbol).ok_or_else(|| {
            LedgerError::InstrumentNotFound {
                symbol: order.symbol.to_string(),
            }
        })?;

        let trade = Trade::new(order, instrument.last_traded_price);
        self.store
            .commit_execution(trade.clone(), order.position_delta());
        tracing::info!(
            order_id = %order.id,
            trade_id = %trade.id,
            price = %trade.price,
            "market order executed"
        );
        Ok(trade)
    }

    /// Fill a limit order iff `reference_price` satisfies its bound
    ///
    /// BUY is eligible when the reference is at or below the limit; SELL when
    /// at or above. An eligible order fills at its limit price, not the
    /// reference. An ineligible order is left untouched and `None` is
    /// returned.
    pub fn execute_limit(
        &self,
        order: &Order,
        reference_price: Price,
    ) -> Result<Option<Trade>, LedgerError> {
        if order.style != OrderStyle::LIMIT {
            return Err(LedgerError::NotLimitOrder);
        }
        let limit_price = match order.price {
            Some(price) => price,
            None => return Err(LedgerError::NotLimitOrder),
        };

        let eligible = match order.side {
            Side::BUY => reference_price <= limit_price,
            Side::SELL => reference_price >= limit_price,
        };
        if !eligible {
            return Ok(None);
        }

        let trade = Trade::new(order, limit_price);
        self.store
            .commit_execution(trade.clone(), order.position_delta());
        tracing::info!(
            order_id = %order.id,
            trade_id = %trade.id,
            price = %trade.price,
            "limit order executed"
        );
        Ok(Some(trade))
    }

    /// Execute every PLACED market order, continuing past failures
    ///
    /// Per-order isolation: a failing order is logged and skipped so it
    /// cannot abort the rest of the batch. Returns the successful trades.
    pub fn sweep(&self) -> Vec<Trade> {
        let pending: Vec<Order> = self
            .store
            .orders()
            .into_iter()
            .filter(Order::is_pending_market)
            .collect();

        let mut executed = Vec::with_capacity(pending.len());
        for order in pending {
            match self.execute_market(&order) {
                Ok(trade) => executed.push(trade),
                Err(err) => {
                    tracing::warn!(order_id = %order.id, error = %err, "failed to execute order");
                }
            }
        }
        executed
    }
}
