use ledger::{LedgerStore, OrderManager, PortfolioAccountant};
use std::sync::Arc;

/// Shared handler state over one in-memory ledger
///
/// Every component holds the same [`LedgerStore`], so an order executed
/// through `orders` is immediately visible to `portfolio` reads.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LedgerStore>,
    pub orders: OrderManager,
    pub portfolio: PortfolioAccountant,
}

impl AppState {
    pub fn new() -> Self {
        let store = Arc::new(LedgerStore::new());
        Self {
            orders: OrderManager::new(Arc::clone(&store)),
            portfolio: PortfolioAccountant::new(Arc::clone(&store)),
            store,
        }
    }
}
