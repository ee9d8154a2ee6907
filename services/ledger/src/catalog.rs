//! Instrument catalog bootstrap
//!
//! The static seed list loaded at service start. Seeding is a caller
//! concern: the store itself is created empty.

use rust_decimal::Decimal;
use types::instrument::{Instrument, InstrumentType};
use types::numeric::Price;

use crate::store::LedgerStore;

/// The default NSE equity catalog
pub fn default_instruments() -> Vec<Instrument> {
    vec![
        nse_stock("TCS", Decimal::new(345025, 2)),       // 3450.25
        nse_stock("INFY", Decimal::new(152040, 2)),      // 1520.40
        nse_stock("RELIANCE", Decimal::new(285010, 2)),  // 2850.10
        nse_stock("HDFC", Decimal::new(168075, 2)),      // 1680.75
        nse_stock("ICICIBANK", Decimal::new(95030, 2)),  // 950.30
    ]
}

/// Load the default catalog into `store`, overwriting by symbol
pub fn seed(store: &LedgerStore) {
    for instrument in default_instruments() {
        store.insert_instrument(instrument);
    }
}

fn nse_stock(symbol: &str, price: Decimal) -> Instrument {
    Instrument::new(symbol, "NSE", InstrumentType::STOCK, Price::new(price))
}
