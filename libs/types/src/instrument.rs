//! Instrument catalog types
//!
//! Instruments are created at bootstrap and are immutable except for
//! `last_traded_price`, which a price feed (or test harness) may overwrite.
//! The engine always reads the live value, never a cached copy.

use crate::ids::Symbol;
use crate::numeric::Price;
use serde::{Deserialize, Serialize};

/// Asset class of a tradable instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstrumentType {
    STOCK,
    BOND,
    ETF,
    OPTION,
}

/// A tradable instrument in the catalog
///
/// `symbol` is the natural key referenced by orders, trades, and holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: Symbol,
    pub exchange: String,
    pub instrument_type: InstrumentType,
    pub last_traded_price: Price,
}

impl Instrument {
    /// Create a new instrument
    pub fn new(
        symbol: impl Into<Symbol>,
        exchange: impl Into<String>,
        instrument_type: InstrumentType,
        last_traded_price: Price,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            exchange: exchange.into(),
            instrument_type,
            last_traded_price,
        }
    }
}
