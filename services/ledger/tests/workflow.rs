//! End-to-end ledger workflows
//!
//! Exercises the full place → execute → account flow through the public API,
//! the way the gateway drives it.

use std::sync::Arc;

use ledger::{
    catalog, ExecutionEngine, LedgerStore, OrderManager, OrderRequest, PortfolioAccountant,
};
use rust_decimal::Decimal;
use types::ids::Symbol;
use types::numeric::Price;
use types::order::{OrderStatus, OrderStyle, Side};

fn setup() -> (
    Arc<LedgerStore>,
    OrderManager,
    ExecutionEngine,
    PortfolioAccountant,
) {
    let store = Arc::new(LedgerStore::new());
    catalog::seed(&store);
    (
        Arc::clone(&store),
        OrderManager::new(Arc::clone(&store)),
        ExecutionEngine::new(Arc::clone(&store)),
        PortfolioAccountant::new(store),
    )
}

fn request(symbol: &str, side: Side, style: OrderStyle, quantity: i64, price: Option<Price>) -> OrderRequest {
    OrderRequest {
        symbol: Symbol::new(symbol),
        side,
        style,
        quantity,
        price,
    }
}

#[test]
fn test_market_buy_end_to_end() {
    let (store, manager, _, accountant) = setup();

    let placement = manager
        .place(request("TCS", Side::BUY, OrderStyle::MARKET, 10, None))
        .unwrap();

    // order is EXECUTED and queryable
    assert_eq!(placement.order.status, OrderStatus::EXECUTED);
    assert_eq!(manager.get(&placement.order.id), Some(placement.order.clone()));

    // exactly one trade, referencing the order, at the live price
    let trades = store.trades();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].order_id, placement.order.id);
    assert_eq!(trades[0].price, Price::new(Decimal::new(345025, 2)));

    // the position reflects the fill
    let snapshot = accountant.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].quantity, 10);
    assert_eq!(snapshot[0].average_price, Price::new(Decimal::new(345025, 2)));
}

#[test]
fn test_limit_lifecycle_with_later_execution() {
    let (store, manager, engine, accountant) = setup();

    let placement = manager
        .place(request(
            "INFY",
            Side::BUY,
            OrderStyle::LIMIT,
            20,
            Some(Price::from_u64(1500)),
        ))
        .unwrap();
    assert_eq!(placement.order.status, OrderStatus::PLACED);
    assert!(placement.execution.is_none());

    // reference above the limit: still pending
    let pending = engine
        .execute_limit(&placement.order, Price::from_u64(1510))
        .unwrap();
    assert!(pending.is_none());
    assert!(accountant.snapshot().is_empty());

    // reference dips to the limit: fills at the limit price
    let trade = engine
        .execute_limit(&placement.order, Price::from_u64(1500))
        .unwrap()
        .expect("limit should fill at the boundary");
    assert_eq!(trade.price, Price::from_u64(1500));

    assert_eq!(
        store.order(&placement.order.id).map(|o| o.status),
        Some(OrderStatus::EXECUTED)
    );
    assert_eq!(
        accountant.holding(&Symbol::new("INFY")).map(|h| h.quantity),
        Some(20)
    );
}

#[test]
fn test_accumulate_then_exit_clears_position() {
    let (store, manager, _, accountant) = setup();
    let tcs = Symbol::new("TCS");

    store.set_last_traded_price(&tcs, Price::from_u64(3000));
    manager
        .place(request("TCS", Side::BUY, OrderStyle::MARKET, 100, None))
        .unwrap();

    store.set_last_traded_price(&tcs, Price::from_u64(3600));
    manager
        .place(request("TCS", Side::BUY, OrderStyle::MARKET, 50, None))
        .unwrap();

    // (100*3000 + 50*3600) / 150 = 3200.00
    let holding = accountant.holding(&tcs).unwrap();
    assert_eq!(holding.quantity, 150);
    assert_eq!(holding.average_price, Price::from_u64(3200));

    manager
        .place(request("TCS", Side::SELL, OrderStyle::MARKET, 150, None))
        .unwrap();

    assert!(accountant.snapshot().is_empty());
    assert_eq!(store.trades().len(), 3);
    assert!(store
        .orders()
        .iter()
        .all(|o| o.status == OrderStatus::EXECUTED));
}

#[test]
fn test_rejected_orders_leave_no_state() {
    let (store, manager, _, _) = setup();

    assert!(manager
        .place(request("TCS", Side::BUY, OrderStyle::MARKET, 0, None))
        .is_err());
    assert!(manager
        .place(request("TCS", Side::BUY, OrderStyle::LIMIT, 10, None))
        .is_err());
    assert!(manager
        .place(request("NOPE", Side::BUY, OrderStyle::MARKET, 10, None))
        .is_err());

    assert!(store.orders().is_empty());
    assert!(store.trades().is_empty());
    assert!(store.holdings().is_empty());
}

#[test]
fn test_mark_to_market_follows_price_moves() {
    let (store, manager, _, accountant) = setup();
    let hdfc = Symbol::new("HDFC");

    store.set_last_traded_price(&hdfc, Price::from_u64(1700));
    manager
        .place(request("HDFC", Side::BUY, OrderStyle::MARKET, 5, None))
        .unwrap();

    for price in [1750u64, 1650, 1700] {
        store.set_last_traded_price(&hdfc, Price::from_u64(price));
        let snapshot = accountant.snapshot();
        assert_eq!(
            snapshot[0].current_value,
            Decimal::from(5) * Decimal::from(price)
        );
    }

    // back at the entry price the position carries no unrealized PnL
    assert_eq!(accountant.total_unrealized_pnl(), Decimal::ZERO);
}

#[test]
fn test_sweep_drains_backlog() {
    let (store, manager, engine, _) = setup();

    // a backlog of pending market orders, entered directly as a crashed
    // immediate-execution path would leave them
    for symbol in ["TCS", "INFY", "ICICIBANK"] {
        let mut order = types::order::Order::new(
            Symbol::new(symbol),
            Side::BUY,
            OrderStyle::MARKET,
            2,
            None,
        );
        order.status = OrderStatus::PLACED;
        store.insert_order(order);
    }

    let trades = engine.sweep();
    assert_eq!(trades.len(), 3);
    assert!(manager
        .list()
        .iter()
        .all(|o| o.status == OrderStatus::EXECUTED));

    // a second sweep finds nothing left
    assert!(engine.sweep().is_empty());
}
