//! The ledger store
//!
//! Single source of truth: instruments, orders, trades, and holdings live in
//! four maps behind one mutex. Every accessor takes the lock; compound
//! operations (execution commit, position delta, snapshot refresh) run inside
//! one critical section so readers never observe a half-applied write.
//!
//! Maps are `BTreeMap` so listings iterate deterministically: symbols sort
//! lexicographically and v7 ids sort by creation time.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::Serialize;
use types::holding::PortfolioHolding;
use types::ids::{OrderId, Symbol, TradeId};
use types::instrument::Instrument;
use types::numeric::Price;
use types::order::{Order, OrderStatus};
use types::trade::Trade;

// ── Stats ───────────────────────────────────────────────────────────

/// Entity counts, reported by the gateway health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerStats {
    pub instruments: usize,
    pub orders: usize,
    pub trades: usize,
    pub holdings: usize,
}

// ── Store ───────────────────────────────────────────────────────────

#[derive(Default)]
struct Books {
    instruments: BTreeMap<Symbol, Instrument>,
    orders: BTreeMap<OrderId, Order>,
    trades: BTreeMap<TradeId, Trade>,
    holdings: BTreeMap<Symbol, PortfolioHolding>,
}

/// Thread-safe in-memory ledger
///
/// Point lookups return `None` for missing keys rather than an error; writes
/// overwrite by key. Positions are only ever mutated through
/// [`LedgerStore::apply_position_delta`] or [`LedgerStore::commit_execution`],
/// which keeps the cost-basis arithmetic in one place.
pub struct LedgerStore {
    books: Mutex<Books>,
}

impl LedgerStore {
    /// Create an empty store. Instruments are seeded by the caller
    /// (see [`crate::catalog`]).
    pub fn new() -> Self {
        Self {
            books: Mutex::new(Books::default()),
        }
    }

    // ── Instruments ─────────────────────────────────────────────────

    pub fn insert_instrument(&self, instrument: Instrument) {
        self.books
            .lock()
            .unwrap()
            .instruments
            .insert(instrument.symbol.clone(), instrument);
    }

    pub fn instrument(&self, symbol: &Symbol) -> Option<Instrument> {
        self.books.lock().unwrap().instruments.get(symbol).cloned()
    }

    pub fn instruments(&self) -> Vec<Instrument> {
        self.books
            .lock()
            .unwrap()
            .instruments
            .values()
            .cloned()
            .collect()
    }

    /// Overwrite an instrument's live price (price-feed / test hook)
    ///
    /// Returns false when the symbol is not in the catalog.
    pub fn set_last_traded_price(&self, symbol: &Symbol, price: Price) -> bool {
        let mut books = self.books.lock().unwrap();
        match books.instruments.get_mut(symbol) {
            Some(instrument) => {
                instrument.last_traded_price = price;
                true
            }
            None => false,
        }
    }

    // ── Orders ──────────────────────────────────────────────────────

    pub fn insert_order(&self, order: Order) {
        self.books.lock().unwrap().orders.insert(order.id, order);
    }

    pub fn order(&self, id: &OrderId) -> Option<Order> {
        self.books.lock().unwrap().orders.get(id).cloned()
    }

    /// All orders in creation order
    pub fn orders(&self) -> Vec<Order> {
        self.books.lock().unwrap().orders.values().cloned().collect()
    }

    /// Unconditional status overwrite; no transition validation
    ///
    /// Returns false when the order does not exist.
    pub fn update_order_status(&self, id: &OrderId, status: OrderStatus) -> bool {
        let mut books = self.books.lock().unwrap();
        match books.orders.get_mut(id) {
            Some(order) => {
                order.status = status;
                true
            }
            None => false,
        }
    }

    // ── Trades ──────────────────────────────────────────────────────

    pub fn insert_trade(&self, trade: Trade) {
        self.books.lock().unwrap().trades.insert(trade.id, trade);
    }

    pub fn trade(&self, id: &TradeId) -> Option<Trade> {
        self.books.lock().unwrap().trades.get(id).cloned()
    }

    /// All trades in execution order
    pub fn trades(&self) -> Vec<Trade> {
        self.books.lock().unwrap().trades.values().cloned().collect()
    }

    pub fn trades_for_symbol(&self, symbol: &Symbol) -> Vec<Trade> {
        self.books
            .lock()
            .unwrap()
            .trades
            .values()
            .filter(|trade| &trade.symbol == symbol)
            .cloned()
            .collect()
    }

    // ── Holdings ────────────────────────────────────────────────────

    pub fn upsert_holding(&self, holding: PortfolioHolding) {
        self.books
            .lock()
            .unwrap()
            .holdings
            .insert(holding.symbol.clone(), holding);
    }

    pub fn holding(&self, symbol: &Symbol) -> Option<PortfolioHolding> {
        self.books.lock().unwrap().holdings.get(symbol).cloned()
    }

    pub fn holdings(&self) -> Vec<PortfolioHolding> {
        self.books
            .lock()
            .unwrap()
            .holdings
            .values()
            .cloned()
            .collect()
    }

    /// Fold a signed position change into the holding for `symbol`
    ///
    /// Revaluation uses the instrument's live price, falling back to
    /// `trade_price` when the symbol is not in the catalog so the operation
    /// stays total. A holding whose quantity reaches exactly zero is removed.
    /// Selling with no existing holding is a no-op, not an error.
    pub fn apply_position_delta(&self, symbol: &Symbol, quantity_change: i64, trade_price: Price) {
        let mut books = self.books.lock().unwrap();
        Self::apply_delta_locked(&mut books, symbol, quantity_change, trade_price);
    }

    fn apply_delta_locked(
        books: &mut Books,
        symbol: &Symbol,
        quantity_change: i64,
        trade_price: Price,
    ) {
        let market_price = books
            .instruments
            .get(symbol)
            .map(|instrument| instrument.last_traded_price)
            .unwrap_or(trade_price);

        if let Some(holding) = books.holdings.get_mut(symbol) {
            holding.apply(quantity_change, trade_price, market_price);
            if holding.quantity == 0 {
                books.holdings.remove(symbol);
            }
        } else if quantity_change > 0 {
            books.holdings.insert(
                symbol.clone(),
                PortfolioHolding::open(symbol.clone(), quantity_change, trade_price, market_price),
            );
        }
    }

    // ── Compound operations ─────────────────────────────────────────

    /// Commit a fill: record the trade, mark its order EXECUTED, and apply
    /// the position delta, all inside one critical section. No reader can
    /// observe the trade without the status and position effects.
    ///
    /// The order lookup is tolerant: a missing order (never produced by the
    /// engine itself) leaves the status untouched but still records the
    /// trade and position change.
    pub fn commit_execution(&self, trade: Trade, position_delta: i64) {
        let mut books = self.books.lock().unwrap();

        let symbol = trade.symbol.clone();
        let trade_price = trade.price;
        let order_id = trade.order_id;

        books.trades.insert(trade.id, trade);
        if let Some(order) = books.orders.get_mut(&order_id) {
            order.status = OrderStatus::EXECUTED;
        }
        Self::apply_delta_locked(&mut books, &symbol, position_delta, trade_price);
    }

    /// Refresh every holding whose instrument is known, persist the new
    /// values, and return them. Holdings for symbols missing from the
    /// catalog stay stored but are omitted from the snapshot.
    pub fn refresh_holdings(&self) -> Vec<PortfolioHolding> {
        let mut books = self.books.lock().unwrap();
        let symbols: Vec<Symbol> = books.holdings.keys().cloned().collect();

        let mut refreshed = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let market_price = match books.instruments.get(&symbol) {
                Some(instrument) => instrument.last_traded_price,
                None => continue,
            };
            if let Some(holding) = books.holdings.get_mut(&symbol) {
                holding.revalue(market_price);
                refreshed.push(holding.clone());
            }
        }
        refreshed
    }

    /// Refresh a single holding against the live price
    ///
    /// When the instrument is missing the stored holding is returned
    /// unchanged (its value is whatever the last write left behind).
    pub fn refresh_holding(&self, symbol: &Symbol) -> Option<PortfolioHolding> {
        let mut books = self.books.lock().unwrap();
        let market_price = books
            .instruments
            .get(symbol)
            .map(|instrument| instrument.last_traded_price);

        let holding = books.holdings.get_mut(symbol)?;
        if let Some(market_price) = market_price {
            holding.revalue(market_price);
        }
        Some(holding.clone())
    }

    pub fn stats(&self) -> LedgerStats {
        let books = self.books.lock().unwrap();
        LedgerStats {
            instruments: books.instruments.len(),
            orders: books.orders.len(),
            trades: books.trades.len(),
            holdings: books.holdings.len(),
        }
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use types::instrument::InstrumentType;
    use types::order::{OrderStyle, Side};

    fn tcs() -> Symbol {
        Symbol::new("TCS")
    }

    fn store_with_tcs() -> LedgerStore {
        let store = LedgerStore::new();
        store.insert_instrument(Instrument::new(
            "TCS",
            "NSE",
            InstrumentType::STOCK,
            Price::new(Decimal::new(345025, 2)), // 3450.25
        ));
        store
    }

    #[test]
    fn test_point_lookups_return_none_for_missing() {
        let store = LedgerStore::new();
        assert!(store.instrument(&tcs()).is_none());
        assert!(store.order(&OrderId::new()).is_none());
        assert!(store.trade(&TradeId::new()).is_none());
        assert!(store.holding(&tcs()).is_none());
    }

    #[test]
    fn test_insert_and_get_order() {
        let store = store_with_tcs();
        let order = Order::new(tcs(), Side::BUY, OrderStyle::MARKET, 10, None);
        store.insert_order(order.clone());

        assert_eq!(store.order(&order.id), Some(order));
        assert_eq!(store.orders().len(), 1);
    }

    #[test]
    fn test_update_order_status_is_unconditional() {
        let store = store_with_tcs();
        let order = Order::new(tcs(), Side::BUY, OrderStyle::MARKET, 10, None);
        let id = order.id;
        store.insert_order(order);

        assert!(store.update_order_status(&id, OrderStatus::EXECUTED));
        // Any transition is accepted, including walking back a terminal state
        assert!(store.update_order_status(&id, OrderStatus::NEW));
        assert_eq!(store.order(&id).map(|o| o.status), Some(OrderStatus::NEW));

        assert!(!store.update_order_status(&OrderId::new(), OrderStatus::CANCELLED));
    }

    #[test]
    fn test_set_last_traded_price_reads_live() {
        let store = store_with_tcs();
        assert!(store.set_last_traded_price(&tcs(), Price::from_u64(3600)));

        let instrument = store.instrument(&tcs()).unwrap();
        assert_eq!(instrument.last_traded_price, Price::from_u64(3600));

        assert!(!store.set_last_traded_price(&Symbol::new("NOPE"), Price::from_u64(1)));
    }

    #[test]
    fn test_buy_delta_creates_holding() {
        let store = store_with_tcs();
        store.apply_position_delta(&tcs(), 10, Price::from_u64(3000));

        let holding = store.holding(&tcs()).unwrap();
        assert_eq!(holding.quantity, 10);
        assert_eq!(holding.average_price, Price::from_u64(3000));
        // valued at the live catalog price, not the trade price:
        // 10 * 3450.25 = 34502.50
        assert_eq!(holding.current_value, Decimal::new(3450250, 2));
    }

    #[test]
    fn test_sell_delta_with_no_holding_is_noop() {
        let store = store_with_tcs();
        store.apply_position_delta(&tcs(), -10, Price::from_u64(3000));
        assert!(store.holding(&tcs()).is_none());
    }

    #[test]
    fn test_exhausted_holding_is_removed() {
        let store = store_with_tcs();
        store.apply_position_delta(&tcs(), 10, Price::from_u64(3000));
        store.apply_position_delta(&tcs(), -10, Price::from_u64(3100));
        assert!(store.holding(&tcs()).is_none());
    }

    #[test]
    fn test_unknown_instrument_falls_back_to_trade_price() {
        let store = LedgerStore::new();
        let symbol = Symbol::new("UNLISTED");
        store.apply_position_delta(&symbol, 5, Price::from_u64(100));

        let holding = store.holding(&symbol).unwrap();
        assert_eq!(holding.current_value, Decimal::from(500));
    }

    #[test]
    fn test_commit_execution_applies_all_effects() {
        let store = store_with_tcs();
        let order = Order::new(tcs(), Side::BUY, OrderStyle::MARKET, 10, None);
        let id = order.id;
        store.insert_order(order.clone());

        let trade = Trade::new(&order, Price::new(Decimal::new(345025, 2)));
        store.commit_execution(trade.clone(), order.position_delta());

        assert_eq!(store.trade(&trade.id), Some(trade));
        assert_eq!(
            store.order(&id).map(|o| o.status),
            Some(OrderStatus::EXECUTED)
        );
        assert_eq!(store.holding(&tcs()).map(|h| h.quantity), Some(10));
    }

    #[test]
    fn test_refresh_holdings_persists_new_values() {
        let store = store_with_tcs();
        store.apply_position_delta(&tcs(), 10, Price::from_u64(3000));
        store.set_last_traded_price(&tcs(), Price::from_u64(3500));

        let snapshot = store.refresh_holdings();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].current_value, Decimal::from(35000));

        // the refreshed value was written back, not just returned
        let stored = store.holding(&tcs()).unwrap();
        assert_eq!(stored.current_value, Decimal::from(35000));
    }

    #[test]
    fn test_refresh_holdings_omits_uncataloged_symbols() {
        let store = store_with_tcs();
        store.apply_position_delta(&tcs(), 10, Price::from_u64(3000));
        store.upsert_holding(PortfolioHolding::open(
            Symbol::new("GHOST"),
            3,
            Price::from_u64(50),
            Price::from_u64(50),
        ));

        let snapshot = store.refresh_holdings();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].symbol, tcs());

        // the orphaned holding is still stored, just not listed
        assert!(store.holding(&Symbol::new("GHOST")).is_some());
    }

    #[test]
    fn test_refresh_single_holding() {
        let store = store_with_tcs();
        store.apply_position_delta(&tcs(), 10, Price::from_u64(3000));
        store.set_last_traded_price(&tcs(), Price::from_u64(4000));

        let holding = store.refresh_holding(&tcs()).unwrap();
        assert_eq!(holding.current_value, Decimal::from(40000));

        // uncataloged symbol: returned as-is, value untouched
        let ghost = PortfolioHolding::open(
            Symbol::new("GHOST"),
            3,
            Price::from_u64(50),
            Price::from_u64(60),
        );
        store.upsert_holding(ghost.clone());
        assert_eq!(store.refresh_holding(&Symbol::new("GHOST")), Some(ghost));
    }

    #[test]
    fn test_trades_for_symbol_filters() {
        let store = store_with_tcs();
        let tcs_order = Order::new(tcs(), Side::BUY, OrderStyle::MARKET, 1, None);
        let infy_order = Order::new(Symbol::new("INFY"), Side::BUY, OrderStyle::MARKET, 2, None);
        store.insert_trade(Trade::new(&tcs_order, Price::from_u64(3450)));
        store.insert_trade(Trade::new(&infy_order, Price::from_u64(1520)));
        store.insert_trade(Trade::new(&tcs_order, Price::from_u64(3451)));

        let tcs_trades = store.trades_for_symbol(&tcs());
        assert_eq!(tcs_trades.len(), 2);
        assert!(tcs_trades.iter().all(|t| t.symbol == tcs()));
    }

    #[test]
    fn test_stats_counts() {
        let store = store_with_tcs();
        let order = Order::new(tcs(), Side::BUY, OrderStyle::MARKET, 10, None);
        store.insert_order(order.clone());
        store.commit_execution(
            Trade::new(&order, Price::from_u64(3450)),
            order.position_delta(),
        );

        let stats = store.stats();
        assert_eq!(stats.instruments, 1);
        assert_eq!(stats.orders, 1);
        assert_eq!(stats.trades, 1);
        assert_eq!(stats.holdings, 1);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use types::instrument::InstrumentType;

    fn seeded_store(live_cents: i64) -> LedgerStore {
        let store = LedgerStore::new();
        store.insert_instrument(Instrument::new(
            "TCS",
            "NSE",
            InstrumentType::STOCK,
            Price::new(Decimal::new(live_cents, 2)),
        ));
        store
    }

    proptest! {
        #[test]
        fn prop_buys_accumulate(
            buys in proptest::collection::vec(1i64..500, 1..20),
            live_cents in 1i64..1_000_000,
            trade_cents in 1i64..1_000_000,
        ) {
            let store = seeded_store(live_cents);
            let symbol = Symbol::new("TCS");
            let trade_price = Price::new(Decimal::new(trade_cents, 2));

            for quantity in &buys {
                store.apply_position_delta(&symbol, *quantity, trade_price);
            }

            let holding = store.holding(&symbol).unwrap();
            let total: i64 = buys.iter().sum();
            prop_assert_eq!(holding.quantity, total);
            prop_assert_eq!(
                holding.current_value,
                Decimal::from(total) * Decimal::new(live_cents, 2)
            );
        }

        #[test]
        fn prop_full_exit_clears_position(
            buys in proptest::collection::vec(1i64..500, 1..10),
            live_cents in 1i64..1_000_000,
        ) {
            let store = seeded_store(live_cents);
            let symbol = Symbol::new("TCS");
            let price = Price::new(Decimal::new(live_cents, 2));

            for quantity in &buys {
                store.apply_position_delta(&symbol, *quantity, price);
            }
            let total: i64 = buys.iter().sum();
            store.apply_position_delta(&symbol, -total, price);

            prop_assert!(store.holding(&symbol).is_none());
            prop_assert_eq!(store.stats().holdings, 0);
        }
    }
}
