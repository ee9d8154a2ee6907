//! Portfolio accounting
//!
//! Folds trades into holdings and derives portfolio-level aggregates. Every
//! read refreshes mark-to-market values against live instrument prices and
//! persists the result, so values are never served stale.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use types::errors::LedgerError;
use types::holding::PortfolioHolding;
use types::ids::Symbol;
use types::order::Side;
use types::trade::Trade;

use crate::store::LedgerStore;

/// Portfolio-level aggregate view
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub holdings: Vec<PortfolioHolding>,
    pub total_value: Decimal,
    pub total_pnl: Decimal,
    pub holdings_count: usize,
}

/// Derives positions and valuations from the trade flow
#[derive(Clone)]
pub struct PortfolioAccountant {
    store: Arc<LedgerStore>,
}

impl PortfolioAccountant {
    pub fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }

    /// Current holdings, revalued against live prices and persisted
    ///
    /// Read-triggers-write: the refreshed values are stored before they are
    /// returned. Holdings whose instrument is missing from the catalog are
    /// omitted.
    pub fn snapshot(&self) -> Vec<PortfolioHolding> {
        self.store.refresh_holdings()
    }

    /// Single holding, revalued when its instrument is known
    pub fn holding(&self, symbol: &Symbol) -> Option<PortfolioHolding> {
        self.store.refresh_holding(symbol)
    }

    /// Sum of current values across the portfolio
    pub fn total_value(&self) -> Decimal {
        self.snapshot().iter().map(|h| h.current_value).sum()
    }

    /// Sum of per-holding mark-to-market gains and losses
    pub fn total_unrealized_pnl(&self) -> Decimal {
        self.snapshot().iter().map(|h| h.unrealized_pnl()).sum()
    }

    /// Holdings plus portfolio totals from one snapshot
    pub fn summary(&self) -> PortfolioSummary {
        let holdings = self.snapshot();
        let total_value = holdings.iter().map(|h| h.current_value).sum();
        let total_pnl = holdings.iter().map(|h| h.unrealized_pnl()).sum();
        PortfolioSummary {
            holdings_count: holdings.len(),
            total_value,
            total_pnl,
            holdings,
        }
    }

    /// Fold a trade into the position for its symbol
    ///
    /// The originating order supplies the side. A trade whose order is
    /// missing indicates ledger corruption and is surfaced as internal.
    pub fn apply_trade(&self, trade: &Trade) -> Result<(), LedgerError> {
        let order = self
            .store
            .order(&trade.order_id)
            .ok_or_else(|| LedgerError::Internal {
                message: format!(
                    "trade {} references missing order {}",
                    trade.id, trade.order_id
                ),
            })?;

        let quantity_change = match order.side {
            Side::BUY => trade.quantity,
            Side::SELL => -trade.quantity,
        };
        self.store
            .apply_position_delta(&trade.symbol, quantity_change, trade.price);
        Ok(())
    }
}
